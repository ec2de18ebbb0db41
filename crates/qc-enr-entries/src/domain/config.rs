//! Entry configuration.

/// Maximum encoded size of a node record, per EIP-778.
pub const MAX_RECORD_SIZE: usize = 300;

/// Limits applied when entries are written to a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryConfig {
    /// Maximum encoded size of a single value (bytes)
    pub max_value_size: usize,
    /// Accept keys that have no dedicated entry type
    pub allow_unknown_keys: bool,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            max_value_size: MAX_RECORD_SIZE,
            allow_unknown_keys: true,
        }
    }
}

impl EntryConfig {
    /// Create a config suitable for testing (small values, strict keys)
    pub fn for_testing() -> Self {
        Self {
            max_value_size: 64,
            allow_unknown_keys: false,
        }
    }
}
