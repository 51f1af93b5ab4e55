use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::error::{Error, Result};
use crate::float::{reduce, Reduced};
use crate::map::Map;
use crate::tag::Tag;

/// A CBOR data item under the deterministic profile.
///
/// The variant list is closed and mirrors the eight major types. Values are
/// immutable once constructed; maps clone their shared storage on mutation.
/// Structural equality holds, with floats compared by bit pattern (total,
/// so the canonical NaN equals itself).
///
/// The `From` conversions are the canonical constructors: they normalize
/// text to NFC, reduce integral floats to integers, and route host big
/// integers through tags 2/3 when they leave the `i64` range. Building
/// variants directly bypasses that canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A non-negative integer in `[0, 2^64 - 1]`.
    Unsigned(u64),
    /// A negative integer; the stored argument `n` means `-1 - n`.
    Negative(u64),
    /// An opaque byte string.
    Bytes(Vec<u8>),
    /// Unicode text in NFC form.
    Text(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered map keyed by encoded key bytes.
    Map(Map),
    /// A tagged value.
    Tagged(Tag, Box<Value>),
    /// A simple value: `false`, `true`, `null`, or a float.
    Simple(Simple),
}

impl Eq for Value {}

/// Major type 7 items admitted by the profile.
#[derive(Debug, Clone, Copy)]
pub enum Simple {
    /// CBOR `false` (simple value 20).
    False,
    /// CBOR `true` (simple value 21).
    True,
    /// CBOR `null` (simple value 22).
    Null,
    /// A floating-point value, canonicalized on construction.
    Float(f64),
}

impl PartialEq for Simple {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::False, Self::False) | (Self::True, Self::True) | (Self::Null, Self::Null) => {
                true
            }
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Simple {}

impl Value {
    /// The CBOR `null` value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Simple(Simple::Null)
    }

    /// Wrap `value` under `tag`.
    pub fn tagged(tag: impl Into<Tag>, value: impl Into<Self>) -> Self {
        Self::Tagged(tag.into(), Box::new(value.into()))
    }

    /// Returns `true` iff this is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Simple(Simple::Null))
    }

    /// The unsigned integer argument, if this is an unsigned integer.
    #[must_use]
    pub const fn as_unsigned(&self) -> Option<u64> {
        match self {
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// The boolean value, if this is `false` or `true`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Simple(Simple::False) => Some(false),
            Self::Simple(Simple::True) => Some(true),
            _ => None,
        }
    }

    /// The float value, if this is a float.
    ///
    /// Integral numbers reduce to integer variants on construction, so use
    /// the [`FromCbor`](crate::FromCbor) impl for `f64` to read those back
    /// as floats.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Simple(Simple::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// The text content, if this is a text string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The byte content, if this is a byte string.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The map, if this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The tag and inner value, if this is a tagged value.
    #[must_use]
    pub fn as_tagged(&self) -> Option<(Tag, &Self)> {
        match self {
            Self::Tagged(tag, inner) => Some((*tag, inner)),
            _ => None,
        }
    }

    /// Project the inner value of a tagged item carrying `expected`.
    ///
    /// # Errors
    ///
    /// Returns `WrongTag` when a different tag is present, and `WrongType`
    /// when the value is not tagged at all.
    pub fn expect_tagged(&self, expected: impl Into<Tag>) -> Result<&Self> {
        let expected = expected.into();
        match self {
            Self::Tagged(tag, inner) if *tag == expected => Ok(inner),
            Self::Tagged(tag, _) => Err(Error::WrongTag {
                expected,
                encountered: *tag,
            }),
            _ => Err(Error::WrongType),
        }
    }

    /// Encode into the canonical byte form.
    #[must_use]
    pub fn to_cbor_data(&self) -> Vec<u8> {
        crate::encode::encode(self)
    }
}

/// Normalize to NFC, borrowing when the input already is.
pub(crate) fn nfc_string(s: &str) -> String {
    if is_nfc(s) {
        String::from(s)
    } else {
        s.nfc().collect()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Simple(if value { Simple::True } else { Simple::False })
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        if value >= 0 {
            Self::Unsigned(value.unsigned_abs())
        } else {
            // -1 - value, computed without overflow for the whole range.
            Self::Negative((value + 1).unsigned_abs())
        }
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::from(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        match reduce(value) {
            Reduced::Unsigned(u) => Self::Unsigned(u),
            Reduced::Negative(n) => Self::Negative(n),
            Reduced::Float(v) => Self::Simple(Simple::Float(v)),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(nfc_string(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        if is_nfc(&value) {
            Self::Text(value)
        } else {
            Self::Text(value.nfc().collect())
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl From<Simple> for Value {
    fn from(value: Simple) -> Self {
        Self::Simple(value)
    }
}
