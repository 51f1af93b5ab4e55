use thiserror::Error;

use crate::tag::Tag;

/// A structured reason a CBOR input was rejected or a projection failed.
///
/// The set of kinds is closed: a decode either returns a complete value or
/// fails with exactly one of these. Encoding never fails on well-formed
/// values, so no encoder-side kinds exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input ended in the middle of a CBOR item.
    #[error("unexpected end of input")]
    Underrun,

    /// A header byte used a reserved width code or indefinite length.
    #[error("invalid header byte {0:#04x}")]
    BadHeaderValue(u8),

    /// An integer or float was encoded in a wider form than necessary.
    #[error("non-canonical numeric encoding")]
    NonCanonicalNumeric,

    /// A simple value (major type 7) outside the allowed set.
    #[error("invalid simple value")]
    InvalidSimple,

    /// A text string's payload is not valid UTF-8.
    #[error("text is not valid UTF-8")]
    InvalidString,

    /// A text string is valid UTF-8 but not NFC-normalized.
    #[error("text is not in Unicode Canonical Composition (NFC) form")]
    NonCanonicalString,

    /// Bytes remained after the single top-level item.
    #[error("{0} unused byte(s) after the encoded item")]
    UnusedData(usize),

    /// Map keys were not in strictly ascending encoded order.
    #[error("misordered map key")]
    MisorderedMapKey,

    /// The same encoded map key appeared twice.
    #[error("duplicate map key")]
    DuplicateMapKey,

    /// A numeric value does not fit the requested host type.
    #[error("value out of range for the requested type")]
    OutOfRange,

    /// The decoded variant does not match the requested type.
    #[error("wrong CBOR type for the requested conversion")]
    WrongType,

    /// A tagged value carried a different tag than expected.
    #[error("expected tag {expected}, encountered tag {encountered}")]
    WrongTag {
        /// The tag the caller asked for.
        expected: Tag,
        /// The tag actually present on the value.
        encountered: Tag,
    },

    /// A recognized tag's content is malformed.
    ///
    /// The core codec never produces this; it is reserved for layers that
    /// interpret tagged content and want to wrap a nested failure.
    #[error("invalid format within a recognized tag's content")]
    InvalidFormat,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
