//! The entry capability and the generic entry adapter.
//!
//! Reference: EIP-778 (Ethereum Node Records)

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

use super::errors::EntryError;

/// Well-known record keys. These are wire-format constants.
pub mod keys {
    /// TCP port.
    pub const TCP: &str = "tcp";
    /// IPv6-specific TCP port.
    pub const TCP6: &str = "tcp6";
    /// UDP port.
    pub const UDP: &str = "udp";
    /// IPv6-specific UDP port.
    pub const UDP6: &str = "udp6";
    /// QUIC port.
    pub const QUIC: &str = "quic";
    /// IPv6-specific QUIC port.
    pub const QUIC6: &str = "quic6";
    /// Identity scheme name.
    pub const ID: &str = "id";
    /// IPv4 address.
    pub const IP: &str = "ip";
    /// IPv6 address.
    pub const IP6: &str = "ip6";
    /// EIP-7636 client info.
    pub const CLIENT: &str = "client";

    /// Every well-known key, sorted.
    pub const ALL: [&str; 10] = [CLIENT, ID, IP, IP6, QUIC, QUIC6, TCP, TCP6, UDP, UDP6];
}

/// Implemented by node record entry types.
///
/// An entry binds a value to a record key and knows how to move that value
/// to and from its RLP representation. The record container calls
/// [`Entry::enr_key`] to find the storage slot, then [`Entry::encode`] or
/// [`Entry::decode`] on the raw value stored there.
pub trait Entry {
    /// The record key this value is stored under.
    fn enr_key(&self) -> &str;

    /// Append exactly one RLP item holding this value.
    ///
    /// Validation failures are reported before anything is appended.
    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError>;

    /// Replace this value with the one held in `rlp`.
    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError>;

    /// Encode into a standalone byte vector.
    fn to_rlp_bytes(&self) -> Result<Vec<u8>, EntryError> {
        let mut s = RlpStream::new();
        self.encode(&mut s)?;
        Ok(s.out().to_vec())
    }

    /// Decode from a raw stored value. Trailing bytes are rejected.
    fn load_from(&mut self, raw: &[u8]) -> Result<(), EntryError> {
        let rlp = Rlp::new(raw);
        if rlp.payload_info()?.total() != raw.len() {
            return Err(DecoderError::RlpInconsistentLengthAndData.into());
        }
        self.decode(&rlp)
    }
}

/// Wraps any RLP-capable value with a key name.
///
/// Use this to set and load values that have no dedicated entry type. The
/// value lives in the adapter itself: decoding overwrites it in place and the
/// caller reads it back with [`WithEntry::value`] or [`WithEntry::into_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithEntry<T> {
    key: String,
    value: T,
}

impl<T> WithEntry<T> {
    /// Wrap `value` under `key`.
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the adapter, returning the wrapped value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default> WithEntry<T> {
    /// An adapter with a default value, ready to be filled by a load.
    pub fn empty(key: impl Into<String>) -> Self {
        Self::new(key, T::default())
    }
}

/// Shorthand for [`WithEntry::new`].
pub fn with_entry<T>(key: impl Into<String>, value: T) -> WithEntry<T>
where
    T: Encodable + Decodable,
{
    WithEntry::new(key, value)
}

impl<T> Entry for WithEntry<T>
where
    T: Encodable + Decodable,
{
    fn enr_key(&self) -> &str {
        &self.key
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        s.append(&self.value);
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        self.value = rlp.as_val()?;
        Ok(())
    }
}
