//! In-memory record store.

use std::collections::BTreeMap;

use crate::ports::RecordStore;

/// Record store backed by a sorted map.
///
/// Keys iterate in byte order, which is the canonical ENR key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRecordStore {
    pairs: BTreeMap<String, Vec<u8>>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<u8>)> for InMemoryRecordStore {
    fn from_iter<I: IntoIterator<Item = (K, Vec<u8>)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, key: &str) -> Option<&[u8]> {
        self.pairs.get(key).map(Vec::as_slice)
    }

    fn insert(&mut self, key: String, value: Vec<u8>) {
        self.pairs.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.pairs.remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.pairs.keys().cloned().collect()
    }
}
