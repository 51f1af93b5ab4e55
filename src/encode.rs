//! Canonical serialization.
//!
//! The output is a deterministic function of the value: minimum-width
//! headers, NFC text, map entries in stored key order, and floats at their
//! narrowest lossless width. Encoding well-formed values cannot fail.

use alloc::vec::Vec;

use unicode_normalization::is_nfc;

use crate::float::{reduce, shortest_width, FloatWidth, Reduced, CANONICAL_NAN_BITS_16};
use crate::value::{nfc_string, Simple, Value};
use crate::varint::{encode_head, MajorType};

/// Encode `value` into its canonical CBOR byte form.
#[must_use]
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(value, &mut out);
    out
}

pub(crate) fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Unsigned(u) => encode_head(out, MajorType::Unsigned, *u),
        Value::Negative(n) => encode_head(out, MajorType::Negative, *n),
        Value::Bytes(bytes) => {
            encode_head(out, MajorType::Bytes, len_arg(bytes.len()));
            out.extend_from_slice(bytes);
        }
        Value::Text(text) => {
            // Constructors normalize, but hand-built variants may not be.
            if is_nfc(text) {
                encode_text(text, out);
            } else {
                encode_text(&nfc_string(text), out);
            }
        }
        Value::Array(items) => {
            encode_head(out, MajorType::Array, len_arg(items.len()));
            for item in items {
                encode_into(item, out);
            }
        }
        Value::Map(map) => {
            encode_head(out, MajorType::Map, len_arg(map.len()));
            for (key_bytes, entry_value) in map.iter_encoded() {
                out.extend_from_slice(key_bytes);
                encode_into(entry_value, out);
            }
        }
        Value::Tagged(tag, inner) => {
            encode_head(out, MajorType::Tagged, tag.value());
            encode_into(inner, out);
        }
        Value::Simple(Simple::False) => out.push(0xf4),
        Value::Simple(Simple::True) => out.push(0xf5),
        Value::Simple(Simple::Null) => out.push(0xf6),
        Value::Simple(Simple::Float(v)) => encode_float(*v, out),
    }
}

fn encode_text(text: &str, out: &mut Vec<u8>) {
    let bytes = text.as_bytes();
    encode_head(out, MajorType::Text, len_arg(bytes.len()));
    out.extend_from_slice(bytes);
}

fn encode_float(value: f64, out: &mut Vec<u8>) {
    match reduce(value) {
        Reduced::Unsigned(u) => encode_head(out, MajorType::Unsigned, u),
        Reduced::Negative(n) => encode_head(out, MajorType::Negative, n),
        Reduced::Float(v) if v.is_nan() => {
            out.push(0xf9);
            out.extend_from_slice(&CANONICAL_NAN_BITS_16.to_be_bytes());
        }
        Reduced::Float(v) => match shortest_width(v) {
            FloatWidth::Half(bits) => {
                out.push(0xf9);
                out.extend_from_slice(&bits.to_be_bytes());
            }
            FloatWidth::Single(bits) => {
                out.push(0xfa);
                out.extend_from_slice(&bits.to_be_bytes());
            }
            FloatWidth::Double(bits) => {
                out.push(0xfb);
                out.extend_from_slice(&bits.to_be_bytes());
            }
        },
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn len_arg(len: usize) -> u64 {
    // usize is at most 64 bits on every supported target.
    len as u64
}
