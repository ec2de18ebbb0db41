//! # Entry Service
//!
//! Wires the typed entries to a [`RecordStore`]: every failure is scoped to
//! the key it concerns, so callers can tell a missing field from a broken one.

use tracing::{debug, trace};

use crate::domain::{Entry, EntryConfig, EntryError, KeyError, KnownEntry};
use crate::ports::{ConfigProvider, RecordStore};

/// Typed access to the entries of one record.
#[derive(Debug)]
pub struct EntryService<S: RecordStore> {
    store: S,
    config: EntryConfig,
}

impl<S: RecordStore> EntryService<S> {
    /// Create a service over `store` with the given limits.
    pub fn new(store: S, config: EntryConfig) -> Self {
        Self { store, config }
    }

    /// Create a service over `store`, taking limits from `provider`.
    pub fn with_provider<P: ConfigProvider + ?Sized>(store: S, provider: &P) -> Self {
        Self::new(store, provider.get_entry_config())
    }

    /// Active limits.
    pub fn config(&self) -> &EntryConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Encode `entry` and store it under its key.
    ///
    /// Nothing is written when encoding fails.
    ///
    /// # Errors
    ///
    /// - `EntryError::UnknownKey` if unknown keys are disabled
    /// - any encode validation error of the entry
    /// - `EntryError::ValueTooLarge` above `max_value_size`
    pub fn set<E: Entry + ?Sized>(&mut self, entry: &E) -> Result<(), KeyError> {
        let key = entry.enr_key();
        let raw = self.encode_checked(entry).map_err(|cause| {
            debug!(key, error = %cause, "rejected ENR entry");
            KeyError::new(key, cause)
        })?;

        trace!(key, size = raw.len(), "stored ENR entry");
        self.store.insert(key.to_string(), raw);
        Ok(())
    }

    fn encode_checked<E: Entry + ?Sized>(&self, entry: &E) -> Result<Vec<u8>, EntryError> {
        if !self.config.allow_unknown_keys && !KnownEntry::is_known_key(entry.enr_key()) {
            return Err(EntryError::UnknownKey);
        }
        let raw = entry.to_rlp_bytes()?;
        if raw.len() > self.config.max_value_size {
            return Err(EntryError::ValueTooLarge {
                size: raw.len(),
                max: self.config.max_value_size,
            });
        }
        Ok(raw)
    }

    /// Load the value stored under `entry`'s key into `entry`.
    ///
    /// # Errors
    ///
    /// A [`KeyError`] whose cause is `EntryError::NotFound` when the key is
    /// absent; otherwise the decode error. `entry` may be left partially
    /// updated only by its own decode routine, never by this method.
    pub fn load<E: Entry + ?Sized>(&self, entry: &mut E) -> Result<(), KeyError> {
        let key = entry.enr_key().to_string();
        let Some(raw) = self.store.get(&key) else {
            return Err(KeyError::not_found(key));
        };
        entry.load_from(raw).map_err(|cause| {
            debug!(key = %key, error = %cause, "failed to decode ENR entry");
            KeyError::new(key, cause)
        })
    }

    /// Decode the value stored under `key` into its well-known type.
    pub fn load_known(&self, key: &str) -> Result<KnownEntry, KeyError> {
        let raw = self.store.get(key).ok_or_else(|| KeyError::not_found(key))?;
        KnownEntry::from_raw(key, raw).inspect_err(|err| {
            debug!(key, error = %err.cause, "failed to decode ENR entry");
        })
    }

    /// Decode every stored pair, in the store's key order.
    pub fn entries(&self) -> Result<Vec<KnownEntry>, KeyError> {
        self.store
            .keys()
            .iter()
            .map(|key| self.load_known(key))
            .collect()
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.store.get(key).is_some()
    }

    /// Remove the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> bool {
        self.store.remove(key)
    }
}
