//! Floating-point canonicalization.
//!
//! The deterministic profile gives every numeric value exactly one wire
//! form. Floats equal to a mathematical integer in the major-type 0/1 range
//! collapse to that integer; remaining floats use the narrowest IEEE-754
//! width that preserves the value; NaN has a single canonical bit pattern.

use half::f16;

use crate::error::{Error, Result};

/// The canonical NaN: quiet, positive, zero payload, half-precision.
pub(crate) const CANONICAL_NAN_BITS_16: u16 = 0x7e00;

const CANONICAL_NAN_BITS_64: u64 = 0x7ff8_0000_0000_0000;

/// 2^64 as an `f64`; every finite integral float below this fits `u64`.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// A float after numeric reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reduced {
    Unsigned(u64),
    Negative(u64),
    Float(f64),
}

/// Reduce `value` to its canonical numeric form.
///
/// `-0.0` reduces to unsigned zero; NaN canonicalizes to the single
/// permitted payload; everything else integral within `[-2^64, 2^64 - 1]`
/// becomes the corresponding integer.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub(crate) fn reduce(value: f64) -> Reduced {
    if value.is_nan() {
        return Reduced::Float(f64::from_bits(CANONICAL_NAN_BITS_64));
    }
    if value >= 0.0 && value < TWO_POW_64 {
        let u = value as u64;
        if in_u64_range(value, u) {
            return Reduced::Unsigned(u);
        }
    } else if value >= -TWO_POW_64 && value <= -1.0 {
        // Magnitude may be 2^64 exactly, so go through u128.
        let m = (-value) as u128;
        if m as f64 == -value {
            return Reduced::Negative((m - 1) as u64);
        }
    }
    Reduced::Float(value)
}

#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
fn in_u64_range(value: f64, truncated: u64) -> bool {
    // Exact iff truncation lost nothing.
    truncated as f64 == value
}

/// The narrowest lossless wire width for a non-integral, non-NaN float.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FloatWidth {
    Half(u16),
    Single(u32),
    Double(u64),
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub(crate) fn shortest_width(value: f64) -> FloatWidth {
    let h = f16::from_f64(value);
    if f64::from(h) == value {
        return FloatWidth::Half(h.to_bits());
    }
    let s = value as f32;
    if f64::from(s) == value {
        return FloatWidth::Single(s.to_bits());
    }
    FloatWidth::Double(value.to_bits())
}

/// Validate a decoded half-precision bit pattern.
pub(crate) fn decode_half(bits: u16) -> Result<f64> {
    let value = f64::from(f16::from_bits(bits));
    if value.is_nan() {
        if bits == CANONICAL_NAN_BITS_16 {
            return Ok(f64::from_bits(CANONICAL_NAN_BITS_64));
        }
        return Err(Error::NonCanonicalNumeric);
    }
    reject_reducible(value)?;
    Ok(value)
}

/// Validate a decoded single-precision bit pattern.
pub(crate) fn decode_single(bits: u32) -> Result<f64> {
    let value = f64::from(f32::from_bits(bits));
    if value.is_nan() {
        // NaN is only encodable at half precision.
        return Err(Error::NonCanonicalNumeric);
    }
    reject_narrower_than_single(value)?;
    reject_reducible(value)?;
    Ok(value)
}

/// Validate a decoded double-precision bit pattern.
pub(crate) fn decode_double(bits: u64) -> Result<f64> {
    let value = f64::from_bits(bits);
    if value.is_nan() {
        return Err(Error::NonCanonicalNumeric);
    }
    reject_narrower_than_double(value)?;
    reject_reducible(value)?;
    Ok(value)
}

fn reject_reducible(value: f64) -> Result<()> {
    match reduce(value) {
        Reduced::Float(_) => Ok(()),
        Reduced::Unsigned(_) | Reduced::Negative(_) => Err(Error::NonCanonicalNumeric),
    }
}

#[allow(clippy::float_cmp)]
fn reject_narrower_than_single(value: f64) -> Result<()> {
    if f64::from(f16::from_f64(value)) == value {
        return Err(Error::NonCanonicalNumeric);
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn reject_narrower_than_double(value: f64) -> Result<()> {
    if f64::from(value as f32) == value {
        return Err(Error::NonCanonicalNumeric);
    }
    Ok(())
}
