//! Big-integer bridge (tags 2 and 3).
//!
//! Integers outside the major-type 0/1 argument space travel as a tagged
//! byte string holding the minimal big-endian magnitude: tag 2 carries the
//! value itself, tag 3 carries `-1 - value`. The value model keeps the
//! tagged form; conversion to and from `num_bigint` types happens at the
//! constructor and accessor boundaries.

use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{Error, Result};
use crate::tag::{TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
use crate::value::Value;

/// A magnitude is canonical iff it is non-empty with no leading zero.
pub(crate) fn is_canonical_magnitude(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes[0] != 0
}

/// Minimal big-endian bytes of a non-zero `u128`.
fn magnitude_from_u128(n: u128) -> Vec<u8> {
    debug_assert!(n != 0);
    let raw = n.to_be_bytes();
    let leading = (n.leading_zeros() / 8) as usize;
    raw[leading..].to_vec()
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        if let Ok(small) = i64::try_from(value) {
            return Self::from(small);
        }
        Self::tagged(
            TAG_POSITIVE_BIGNUM,
            Self::Bytes(magnitude_from_u128(value)),
        )
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        if let Ok(small) = i64::try_from(value) {
            return Self::from(small);
        }
        if value >= 0 {
            return Self::tagged(
                TAG_POSITIVE_BIGNUM,
                Self::Bytes(magnitude_from_u128(value.unsigned_abs())),
            );
        }
        // Tag 3 carries -1 - value; no overflow since value < -2^63.
        let argument = (-1 - value).unsigned_abs();
        Self::tagged(
            TAG_NEGATIVE_BIGNUM,
            Self::Bytes(magnitude_from_u128(argument)),
        )
    }
}

impl From<BigUint> for Value {
    fn from(value: BigUint) -> Self {
        if let Ok(small) = i64::try_from(&value) {
            return Self::from(small);
        }
        Self::tagged(TAG_POSITIVE_BIGNUM, Self::Bytes(value.to_bytes_be()))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        if let Ok(small) = i64::try_from(&value) {
            return Self::from(small);
        }
        if value.sign() == Sign::Minus {
            // Tag 3 carries -1 - value = |value| - 1.
            let argument = value.magnitude() - 1u32;
            Self::tagged(TAG_NEGATIVE_BIGNUM, Self::Bytes(argument.to_bytes_be()))
        } else {
            Self::tagged(
                TAG_POSITIVE_BIGNUM,
                Self::Bytes(value.magnitude().to_bytes_be()),
            )
        }
    }
}

/// Project any integer-bearing value onto a `BigInt`.
///
/// Accepts plain integers and canonical tag 2/3 bignums.
pub(crate) fn bigint_from_value(value: &Value) -> Result<BigInt> {
    match value {
        Value::Unsigned(u) => Ok(BigInt::from(*u)),
        Value::Negative(n) => Ok(-BigInt::from(*n) - 1),
        Value::Tagged(tag, inner) if *tag == TAG_POSITIVE_BIGNUM => {
            let magnitude = canonical_bytes_of(inner)?;
            Ok(BigInt::from_biguint(
                Sign::Plus,
                BigUint::from_bytes_be(magnitude),
            ))
        }
        Value::Tagged(tag, inner) if *tag == TAG_NEGATIVE_BIGNUM => {
            let magnitude = canonical_bytes_of(inner)?;
            let argument = BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_be(magnitude));
            Ok(-argument - 1)
        }
        _ => Err(Error::WrongType),
    }
}

fn canonical_bytes_of(inner: &Value) -> Result<&[u8]> {
    match inner.as_bytes() {
        Some(bytes) if is_canonical_magnitude(bytes) => Ok(bytes),
        _ => Err(Error::WrongType),
    }
}
