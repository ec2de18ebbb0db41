//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this crate **requires** the host application to implement.

use crate::domain::EntryConfig;

/// The key/value container of a node record.
///
/// Holds one encoded RLP value per key. Key uniqueness, canonical ordering,
/// signing and sequence numbers are the container's business.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a record can be shared behind
/// the host's own lock.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct SignedRecord {
///     pairs: BTreeMap<String, Vec<u8>>,
///     seq: u64,
///     signature: Vec<u8>,
/// }
///
/// impl RecordStore for SignedRecord {
///     fn insert(&mut self, key: String, value: Vec<u8>) {
///         self.pairs.insert(key, value);
///         self.signature.clear(); // must be re-signed
///     }
///     // ...
/// }
/// ```
pub trait RecordStore: Send + Sync {
    /// Encoded value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&[u8]>;

    /// Store `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: String, value: Vec<u8>);

    /// Remove `key`. Returns whether it was present.
    fn remove(&mut self, key: &str) -> bool;

    /// All keys, in the container's canonical order.
    fn keys(&self) -> Vec<String>;
}

/// Abstract interface for configuration.
pub trait ConfigProvider: Send + Sync {
    /// Get entry limits.
    fn get_entry_config(&self) -> EntryConfig;
}
