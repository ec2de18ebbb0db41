//! Domain Layer - Pure entry logic with no I/O
//!
//! This module contains the typed node record entries:
//! - The `Entry` capability and the generic `WithEntry` adapter
//! - Port and identity scheme entries
//! - Raw and structured address entries
//! - EIP-7636 client info
//! - Key-tagged dispatch over the well-known entries
//! - Key-scoped errors

pub mod client;
pub mod config;
pub mod entities;
pub mod entry;
pub mod errors;
pub mod ip;
pub mod known;
pub mod scalar;

pub use client::Client;
pub use config::{EntryConfig, MAX_RECORD_SIZE};
pub use entities::IpAddr;
pub use entry::{keys, with_entry, Entry, WithEntry};
pub use errors::{is_not_found, EntryError, KeyError};
pub use ip::{Ip, Ipv4, Ipv4Addr, Ipv6, Ipv6Addr};
pub use known::KnownEntry;
pub use scalar::{Id, Quic, Quic6, Tcp, Tcp6, Udp, Udp6, ID_V4};
