//! Domain Errors for ENR entries
//!
//! Two layers:
//! - [`EntryError`]: what went wrong with a single value (codec failure,
//!   width/length violation, family mismatch, or the not-found sentinel).
//! - [`KeyError`]: an [`EntryError`] scoped to the record key it concerns.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Errors produced while encoding, decoding or storing a single entry value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryError {
    /// The key is absent from the record.
    #[error("not found")]
    NotFound,

    /// Raw address that is neither 4 nor 16 bytes wide.
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Decoded address payload that is neither 4 nor 16 bytes wide.
    #[error("invalid IP address, want 4 or 16 bytes: {0}")]
    InvalidIpLength(String),

    /// Raw address that does not narrow to 4 bytes.
    #[error("invalid IPv4 address: {0}")]
    InvalidIpv4(String),

    /// Decoded `ip` payload that is not exactly 4 bytes.
    #[error("invalid IPv4 address, want 4 bytes: {0}")]
    InvalidIpv4Length(String),

    /// Raw address that cannot be represented in 16 bytes.
    #[error("invalid IPv6 address: {0}")]
    InvalidIpv6(String),

    /// Decoded `ip6` payload that is not exactly 16 bytes.
    #[error("invalid IPv6 address, want 16 bytes: {0}")]
    InvalidIpv6Length(String),

    /// Structured address of the wrong family given to an `ip` entry.
    #[error("address is not IPv4")]
    NotIpv4,

    /// Structured address of the wrong family given to an `ip6` entry.
    #[error("address is not IPv6")]
    NotIpv6,

    /// Client info with a present-slot count outside 2..=3.
    #[error("invalid client info length: {0}")]
    InvalidClientLength(usize),

    /// Encoded value exceeds the configured size limit.
    #[error("value of {size} bytes exceeds limit of {max} bytes")]
    ValueTooLarge {
        /// Encoded size in bytes.
        size: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Key is not one of the well-known entry keys and unknown keys are disabled.
    #[error("unknown key")]
    UnknownKey,

    /// Malformed RLP framing, truncated input or codec-level type mismatch.
    #[error(transparent)]
    Codec(#[from] rlp::DecoderError),
}

/// An error related to a specific record key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyError {
    /// The record key the error concerns.
    pub key: String,
    /// The underlying cause.
    pub cause: EntryError,
}

impl KeyError {
    /// Wrap `cause` with the key it concerns.
    pub fn new(key: impl Into<String>, cause: EntryError) -> Self {
        Self {
            key: key.into(),
            cause,
        }
    }

    /// Build the "missing key" error for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::new(key, EntryError::NotFound)
    }

    /// Whether the cause is the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self.cause, EntryError::NotFound)
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_not_found() {
            write!(f, "missing ENR key {:?}", self.key)
        } else {
            write!(f, "ENR key {:?}: {}", self.key, self.cause)
        }
    }
}

impl StdError for KeyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.cause)
    }
}

/// Reports whether `err` means that a key/value pair is missing from a record.
///
/// Walks the `source()` chain looking for a [`KeyError`]; only a `KeyError`
/// whose cause is [`EntryError::NotFound`] counts.
pub fn is_not_found(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(key_err) = e.downcast_ref::<KeyError>() {
            return key_err.is_not_found();
        }
        current = e.source();
    }
    false
}

/// Render raw address bytes for error messages.
///
/// 4 and 16 byte inputs print as addresses; anything else as `?` + hex.
pub(crate) fn fmt_ip_bytes(bytes: &[u8]) -> String {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return std::net::Ipv4Addr::from(octets).to_string();
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return std::net::Ipv6Addr::from(octets).to_string();
    }
    if bytes.is_empty() {
        return "<nil>".to_string();
    }
    format!("?{}", hex::encode(bytes))
}
