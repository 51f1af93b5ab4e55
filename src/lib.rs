//! # det-cbor
//!
//! Strict deterministic CBOR (RFC 8949): every logically equal value has
//! exactly one valid byte encoding, and the decoder rejects anything else.
//!
//! ## Design principles
//!
//! - **One encoding per value.**
//!   Minimum-width headers, map keys sorted by their encoded bytes, NFC
//!   text, floats reduced to integers when integral and emitted at their
//!   narrowest lossless width, a single NaN payload.
//! - **Asymmetric strictness.**
//!   The encoder cannot fail on well-formed values; the decoder fails with
//!   a structured [`Error`] on any deviation from the canonical profile,
//!   including trailing bytes.
//! - **Values are immutable.**
//!   Maps share storage behind a reference-counted handle and clone it
//!   only when a mutation hits shared storage, so passing maps around is
//!   constant-time while value semantics hold.
//!
//! ## Example
//!
//! ```
//! use det_cbor::{decode, encode, Map, Value};
//!
//! let mut map = Map::new();
//! map.insert(1, 2);
//! map.insert(3, 4);
//! let value = Value::from(map);
//!
//! let bytes = encode(&value);
//! assert_eq!(bytes, [0xa2, 0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: `std::error::Error` for [`Error`] and std builds
//!   of the numeric/Unicode dependencies.
//! - `simdutf8`: SIMD UTF-8 validation on the decode path.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible with an allocator; the owned value
//! model requires `alloc`.
//!
//! ## Safety
//!
//! This crate forbids `unsafe` code.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

extern crate alloc;

mod bigint;
mod codec;
mod decode;
mod dump;
mod encode;
mod error;
mod float;
mod map;
mod tag;
mod utf8;
mod value;
mod varint;

pub use crate::codec::{FromCbor, ToCbor};
pub use crate::decode::decode;
pub use crate::dump::{dump, TagNames};
pub use crate::encode::encode;
pub use crate::error::{Error, Result};
pub use crate::map::Map;
pub use crate::tag::{Tag, TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
pub use crate::value::{Simple, Value};
