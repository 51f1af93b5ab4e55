use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::encode::encode;
use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
struct MapEntry {
    key: Value,
    value: Value,
}

/// An ordered map keyed by the canonical encoding of each key.
///
/// Entries sort ascending in lexicographic byte order of the encoded key,
/// which is exactly the order the wire format requires, so serialization
/// walks the storage front to back. Two keys are equal iff their encoded
/// bytes are equal.
///
/// Storage sits behind a shared-ownership handle: cloning a map is
/// constant-time, and a mutation clones the underlying table only when it
/// is still shared with another handle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Arc<BTreeMap<Vec<u8>, MapEntry>>,
}

impl Eq for Map {}

impl Map {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` iff the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, replacing any entry whose key encodes identically.
    ///
    /// Returns the previous value for that key, if any.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let key_bytes = encode(&key);
        let entry = MapEntry {
            key,
            value: value.into(),
        };
        Arc::make_mut(&mut self.entries)
            .insert(key_bytes, entry)
            .map(|prior| prior.value)
    }

    /// Remove the entry for `key`, returning its value if present.
    pub fn remove(&mut self, key: impl Into<Value>) -> Option<Value> {
        let key_bytes = encode(&key.into());
        if !self.entries.contains_key(&key_bytes) {
            return None;
        }
        Arc::make_mut(&mut self.entries)
            .remove(&key_bytes)
            .map(|entry| entry.value)
    }

    /// Look up the value for `key`.
    #[must_use]
    pub fn get(&self, key: impl Into<Value>) -> Option<&Value> {
        let key_bytes = encode(&key.into());
        self.entries.get(&key_bytes).map(|entry| &entry.value)
    }

    /// Returns `true` iff an entry exists for `key`.
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Value>) -> bool {
        let key_bytes = encode(&key.into());
        self.entries.contains_key(&key_bytes)
    }

    /// Iterate entries as `(key, value)` pairs in ascending key-byte order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.values().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterate keys in ascending key-byte order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.values().map(|entry| &entry.key)
    }

    /// Iterate values in ascending key-byte order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values().map(|entry| &entry.value)
    }

    /// Append an entry whose key must sort strictly after every existing
    /// key.
    ///
    /// The decoder uses this to enforce wire order while building the map
    /// in a single pass.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMapKey` when the key already exists and
    /// `MisorderedMapKey` when it does not sort after the current maximum.
    pub fn insert_next(&mut self, key: Value, value: Value) -> Result<()> {
        let key_bytes = encode(&key);
        self.insert_next_encoded(key_bytes, key, value)
    }

    /// `insert_next` with the key's canonical bytes already at hand.
    pub(crate) fn insert_next_encoded(
        &mut self,
        key_bytes: Vec<u8>,
        key: Value,
        value: Value,
    ) -> Result<()> {
        if let Some((last, _)) = self.entries.last_key_value() {
            match key_bytes.as_slice().cmp(last.as_slice()) {
                Ordering::Less => return Err(Error::MisorderedMapKey),
                Ordering::Equal => return Err(Error::DuplicateMapKey),
                Ordering::Greater => {}
            }
        }
        Arc::make_mut(&mut self.entries).insert(key_bytes, MapEntry { key, value });
        Ok(())
    }

    /// Iterate entries as `(encoded key bytes, value)` for serialization.
    pub(crate) fn iter_encoded(&self) -> impl Iterator<Item = (&[u8], &Value)> {
        self.entries
            .iter()
            .map(|(key_bytes, entry)| (key_bytes.as_slice(), &entry.value))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Value>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
