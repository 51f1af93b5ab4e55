#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

/// Validate UTF-8 bytes, returning a borrowed `&str` on success.
#[inline]
pub(crate) fn validate(bytes: &[u8]) -> Result<&str, ()> {
    #[cfg(feature = "simdutf8")]
    {
        simd_utf8::from_utf8(bytes).map_err(|_| ())
    }

    #[cfg(not(feature = "simdutf8"))]
    {
        core::str::from_utf8(bytes).map_err(|_| ())
    }
}
