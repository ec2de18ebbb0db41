//! # Adapters
//!
//! Concrete implementations of the driven ports.
//!
//! - `InMemoryRecordStore` - Sorted in-memory record container
//! - `StaticConfigProvider` - Hardcoded limits
//! - `TomlConfigProvider` - Limits from a TOML file (requires "config" feature)

pub mod config;
pub mod memory;

pub use config::StaticConfigProvider;
#[cfg(feature = "config")]
pub use config::{ConfigError, TomlConfigProvider};
pub use memory::InMemoryRecordStore;
