//! The encodable/decodable contract.
//!
//! `ToCbor` is the capability to produce a [`Value`] (and through it the
//! canonical byte form); `FromCbor` is the fallible projection back onto a
//! host type. The codec implements both for host primitives; user-defined
//! types implement them at their own boundaries.

use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint};

use crate::bigint::bigint_from_value;
use crate::encode::encode;
use crate::error::{Error, Result};
use crate::map::Map;
use crate::value::Value;

/// Conversion into a CBOR value and its canonical bytes.
pub trait ToCbor {
    /// Produce the CBOR value representing `self`.
    fn to_cbor(&self) -> Value;

    /// Produce the canonical byte encoding of `self`.
    fn to_cbor_data(&self) -> Vec<u8> {
        encode(&self.to_cbor())
    }
}

/// Fallible projection of a CBOR value onto a host type.
pub trait FromCbor: Sized {
    /// Convert `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns `WrongType` when the variant does not match and `OutOfRange`
    /// when a numeric value does not fit.
    fn from_cbor(value: &Value) -> Result<Self>;
}

impl ToCbor for Value {
    fn to_cbor(&self) -> Value {
        self.clone()
    }
}

impl FromCbor for Value {
    fn from_cbor(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

macro_rules! to_cbor_via_from {
    ($($t:ty),* $(,)?) => {$(
        impl ToCbor for $t {
            fn to_cbor(&self) -> Value {
                Value::from(self.clone())
            }
        }
    )*};
}

to_cbor_via_from!(
    bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, u128, i128, f32, f64, String,
    Vec<u8>, BigInt, BigUint, Map,
);

impl ToCbor for &str {
    fn to_cbor(&self) -> Value {
        Value::from(*self)
    }
}

impl FromCbor for bool {
    fn from_cbor(value: &Value) -> Result<Self> {
        value.as_bool().ok_or(Error::WrongType)
    }
}

impl FromCbor for u64 {
    fn from_cbor(value: &Value) -> Result<Self> {
        match value {
            Value::Unsigned(u) => Ok(*u),
            Value::Negative(_) | Value::Tagged(..) => {
                let big = bigint_from_value(value)?;
                Self::try_from(big).map_err(|_| Error::OutOfRange)
            }
            _ => Err(Error::WrongType),
        }
    }
}

impl FromCbor for i64 {
    fn from_cbor(value: &Value) -> Result<Self> {
        match value {
            Value::Unsigned(u) => Self::try_from(*u).map_err(|_| Error::OutOfRange),
            Value::Negative(n) => {
                let n = Self::try_from(*n).map_err(|_| Error::OutOfRange)?;
                Ok(-1 - n)
            }
            Value::Tagged(..) => {
                let big = bigint_from_value(value)?;
                Self::try_from(big).map_err(|_| Error::OutOfRange)
            }
            _ => Err(Error::WrongType),
        }
    }
}

macro_rules! from_cbor_via_u64 {
    ($($t:ty),* $(,)?) => {$(
        impl FromCbor for $t {
            fn from_cbor(value: &Value) -> Result<Self> {
                let wide = u64::from_cbor(value)?;
                Self::try_from(wide).map_err(|_| Error::OutOfRange)
            }
        }
    )*};
}

from_cbor_via_u64!(u8, u16, u32, usize);

macro_rules! from_cbor_via_i64 {
    ($($t:ty),* $(,)?) => {$(
        impl FromCbor for $t {
            fn from_cbor(value: &Value) -> Result<Self> {
                let wide = i64::from_cbor(value)?;
                Self::try_from(wide).map_err(|_| Error::OutOfRange)
            }
        }
    )*};
}

from_cbor_via_i64!(i8, i16, i32, isize);

impl FromCbor for u128 {
    fn from_cbor(value: &Value) -> Result<Self> {
        let big = bigint_from_value(value)?;
        Self::try_from(big).map_err(|_| Error::OutOfRange)
    }
}

impl FromCbor for i128 {
    fn from_cbor(value: &Value) -> Result<Self> {
        let big = bigint_from_value(value)?;
        Self::try_from(big).map_err(|_| Error::OutOfRange)
    }
}

impl FromCbor for BigInt {
    fn from_cbor(value: &Value) -> Result<Self> {
        bigint_from_value(value)
    }
}

impl FromCbor for BigUint {
    fn from_cbor(value: &Value) -> Result<Self> {
        let big = bigint_from_value(value)?;
        big.to_biguint().ok_or(Error::OutOfRange)
    }
}

impl FromCbor for f64 {
    fn from_cbor(value: &Value) -> Result<Self> {
        match value {
            Value::Simple(_) => value.as_float().ok_or(Error::WrongType),
            // Integral values reduce to integers on the wire; project them
            // back when exactly representable.
            Value::Unsigned(u) => exact_f64_from_u128(u128::from(*u)),
            Value::Negative(n) => {
                let magnitude = u128::from(*n) + 1;
                exact_f64_from_u128(magnitude).map(|f| -f)
            }
            _ => Err(Error::WrongType),
        }
    }
}

impl FromCbor for f32 {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn from_cbor(value: &Value) -> Result<Self> {
        let wide = f64::from_cbor(value)?;
        if wide.is_nan() {
            return Ok(Self::NAN);
        }
        let narrow = wide as Self;
        if f64::from(narrow) == wide {
            Ok(narrow)
        } else {
            Err(Error::OutOfRange)
        }
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn exact_f64_from_u128(magnitude: u128) -> Result<f64> {
    let f = magnitude as f64;
    if f as u128 == magnitude {
        Ok(f)
    } else {
        Err(Error::OutOfRange)
    }
}

impl FromCbor for String {
    fn from_cbor(value: &Value) -> Result<Self> {
        value.as_text().map(Self::from).ok_or(Error::WrongType)
    }
}

impl FromCbor for Vec<u8> {
    fn from_cbor(value: &Value) -> Result<Self> {
        value.as_bytes().map(<[u8]>::to_vec).ok_or(Error::WrongType)
    }
}

impl FromCbor for Map {
    fn from_cbor(value: &Value) -> Result<Self> {
        value.as_map().cloned().ok_or(Error::WrongType)
    }
}
