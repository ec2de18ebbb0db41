//! # Typed Node Record Entries
//!
//! **Reference:** EIP-778 (Ethereum Node Records), EIP-7636 (client info)
//!
//! A node record is a signed list of key/value pairs whose values are RLP
//! encoded. This crate defines *what* the well-known values look like on the
//! wire and validates them in both directions; it does not sign, order or
//! transport records.
//!
//! ## Entries
//!
//! | Key | Types |
//! |-----|-------|
//! | `tcp`, `tcp6`, `udp`, `udp6`, `quic`, `quic6` | [`Tcp`] .. [`Quic6`] (`u16`) |
//! | `id` | [`Id`] (`"v4"` by default) |
//! | `ip` / `ip6` | [`Ip`] (either), [`Ipv4`] / [`Ipv6`] (raw), [`Ipv4Addr`] / [`Ipv6Addr`] (structured) |
//! | `client` | [`Client`] |
//! | anything else | [`WithEntry`] |
//!
//! ## Architecture
//!
//! - **Domain Layer:** entry types, validation, key-scoped errors
//! - **Ports Layer:** the record container and config source
//! - **Service Layer:** `EntryService`, typed set/load over a container
//! - **Adapters Layer:** in-memory container, static and TOML config
//!
//! ## Example
//!
//! ```rust
//! use qc_enr_entries::{
//!     Client, EntryConfig, EntryService, InMemoryRecordStore, IpAddr, Ipv4Addr, Tcp,
//! };
//!
//! let mut record = EntryService::new(InMemoryRecordStore::new(), EntryConfig::default());
//! record.set(&Tcp(30303)).unwrap();
//! record.set(&Ipv4Addr(IpAddr::v4(192, 0, 2, 1))).unwrap();
//! record.set(&Client::new("geth", "1.10.0")).unwrap();
//!
//! let mut client = Client::default();
//! record.load(&mut client).unwrap();
//! assert_eq!(client.version(), Some("1.10.0"));
//!
//! let mut udp = qc_enr_entries::Udp::default();
//! assert!(record.load(&mut udp).unwrap_err().is_not_found());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test fixtures (sample entries, populated stores)
/// Requires feature: `test-utils`
#[cfg(feature = "test-utils")]
pub mod test_utils;

// Domain
pub use domain::{
    is_not_found, keys, with_entry, Client, Entry, EntryConfig, EntryError, Id, Ip, IpAddr, Ipv4,
    Ipv4Addr, Ipv6, Ipv6Addr, KeyError, KnownEntry, Quic, Quic6, Tcp, Tcp6, Udp, Udp6, WithEntry,
    ID_V4, MAX_RECORD_SIZE,
};

// Port traits
pub use ports::{ConfigProvider, RecordStore};

// Service
pub use service::EntryService;

// Adapters
pub use adapters::{InMemoryRecordStore, StaticConfigProvider};
#[cfg(feature = "config")]
pub use adapters::{ConfigError, TomlConfigProvider};
