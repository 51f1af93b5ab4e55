use core::fmt;

/// A CBOR tag number (major type 6 argument).
///
/// The codec treats tags as opaque labels except for
/// [`TAG_POSITIVE_BIGNUM`] and [`TAG_NEGATIVE_BIGNUM`], whose byte-string
/// content is validated on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u64);

/// Tag 2: a positive integer too large for major type 0.
pub const TAG_POSITIVE_BIGNUM: Tag = Tag::new(2);

/// Tag 3: a negative integer whose argument does not fit major type 1.
pub const TAG_NEGATIVE_BIGNUM: Tag = Tag::new(3);

impl Tag {
    /// Construct a tag from its number.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Tag {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for Tag {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
