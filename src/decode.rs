//! Strict single-pass decoder.
//!
//! Exactly one byte sequence is accepted per value: minimum-width headers,
//! NFC text, strictly ascending unique map keys, canonical bignum
//! magnitudes, and floats at their narrowest width. The top level consumes
//! the whole buffer or fails.

use alloc::vec::Vec;

use unicode_normalization::is_nfc;

use crate::bigint::is_canonical_magnitude;
use crate::error::{Error, Result};
use crate::float;
use crate::map::Map;
use crate::tag::{Tag, TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
use crate::utf8;
use crate::value::{Simple, Value};
use crate::varint::{decode_head, MajorType};

/// Decode exactly one canonical CBOR item from `bytes`.
///
/// # Errors
///
/// Returns an [`Error`] when the input deviates from the deterministic
/// profile in any way, including `UnusedData` when bytes trail the item.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    let mut decoder = Decoder::new(bytes);
    let value = decoder.parse_value()?;
    let rest = decoder.remaining();
    if rest > 0 {
        return Err(Error::UnusedData(rest));
    }
    Ok(value)
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::Underrun)?;
        let slice = self.data.get(self.pos..end).ok_or(Error::Underrun)?;
        self.pos = end;
        Ok(slice)
    }

    fn item_length(&self, arg: u64) -> Result<usize> {
        usize::try_from(arg).map_err(|_| Error::Underrun)
    }

    fn parse_value(&mut self) -> Result<Value> {
        let first = *self.data.get(self.pos).ok_or(Error::Underrun)?;
        if first >> 5 == MajorType::Simple.bits() {
            self.pos += 1;
            return self.parse_simple(first);
        }

        let head = decode_head(self.data, self.pos)?;
        self.pos += head.len;

        match head.major {
            MajorType::Unsigned => Ok(Value::Unsigned(head.arg)),
            MajorType::Negative => Ok(Value::Negative(head.arg)),
            MajorType::Bytes => {
                let len = self.item_length(head.arg)?;
                Ok(Value::Bytes(self.read_exact(len)?.to_vec()))
            }
            MajorType::Text => {
                let len = self.item_length(head.arg)?;
                let payload = self.read_exact(len)?;
                let text = utf8::validate(payload).map_err(|()| Error::InvalidString)?;
                if !is_nfc(text) {
                    return Err(Error::NonCanonicalString);
                }
                Ok(Value::Text(text.into()))
            }
            MajorType::Array => {
                let len = self.item_length(head.arg)?;
                // Each element takes at least one byte, so this bound keeps
                // a lying header from reserving unbounded memory.
                let mut items = Vec::with_capacity(len.min(self.remaining()));
                for _ in 0..len {
                    items.push(self.parse_value()?);
                }
                Ok(Value::Array(items))
            }
            MajorType::Map => {
                let len = self.item_length(head.arg)?;
                let mut map = Map::new();
                for _ in 0..len {
                    let key_start = self.pos;
                    let key = self.parse_value()?;
                    // Canonical decoding makes the consumed bytes the
                    // canonical encoding of the parsed key.
                    let key_bytes = self.data[key_start..self.pos].to_vec();
                    let value = self.parse_value()?;
                    map.insert_next_encoded(key_bytes, key, value)?;
                }
                Ok(Value::Map(map))
            }
            MajorType::Tagged => {
                let tag = Tag::new(head.arg);
                let inner = self.parse_value()?;
                if tag == TAG_POSITIVE_BIGNUM || tag == TAG_NEGATIVE_BIGNUM {
                    if let Value::Bytes(magnitude) = &inner {
                        if !is_canonical_magnitude(magnitude) {
                            return Err(Error::NonCanonicalNumeric);
                        }
                    }
                }
                Ok(Value::tagged(tag, inner))
            }
            MajorType::Simple => unreachable!("major type 7 handled above"),
        }
    }

    fn parse_simple(&mut self, header: u8) -> Result<Value> {
        match header & 0x1f {
            20 => Ok(Value::Simple(Simple::False)),
            21 => Ok(Value::Simple(Simple::True)),
            22 => Ok(Value::Simple(Simple::Null)),
            25 => {
                let bits = self.read_be_u16()?;
                Ok(Value::Simple(Simple::Float(float::decode_half(bits)?)))
            }
            26 => {
                let bits = self.read_be_u32()?;
                Ok(Value::Simple(Simple::Float(float::decode_single(bits)?)))
            }
            27 => {
                let bits = self.read_be_u64()?;
                Ok(Value::Simple(Simple::Float(float::decode_double(bits)?)))
            }
            28..=31 => Err(Error::BadHeaderValue(header)),
            _ => Err(Error::InvalidSimple),
        }
    }

    fn read_be_u16(&mut self) -> Result<u16> {
        let s = self.read_exact(2)?;
        Ok(u16::from_be_bytes([s[0], s[1]]))
    }

    fn read_be_u32(&mut self) -> Result<u32> {
        let s = self.read_exact(4)?;
        Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
    }

    fn read_be_u64(&mut self) -> Result<u64> {
        let s = self.read_exact(8)?;
        Ok(u64::from_be_bytes([
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
        ]))
    }
}
