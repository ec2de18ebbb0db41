//! Dispatch over the well-known entry types.
//!
//! [`KnownEntry`] is the closed set of entries this crate understands, plus an
//! [`KnownEntry::Other`] variant that carries unrecognized keys through
//! untouched. Dispatch is by key tag.

use rlp::{Rlp, RlpStream};
use tracing::trace;

use super::client::Client;
use super::entry::{keys, Entry};
use super::errors::{EntryError, KeyError};
use super::ip::{Ipv4Addr, Ipv6Addr};
use super::scalar::{Id, Quic, Quic6, Tcp, Tcp6, Udp, Udp6};

/// A decoded record entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnownEntry {
    /// "tcp"
    Tcp(Tcp),
    /// "tcp6"
    Tcp6(Tcp6),
    /// "udp"
    Udp(Udp),
    /// "udp6"
    Udp6(Udp6),
    /// "quic"
    Quic(Quic),
    /// "quic6"
    Quic6(Quic6),
    /// "id"
    Id(Id),
    /// "ip"
    Ip(Ipv4Addr),
    /// "ip6"
    Ip6(Ipv6Addr),
    /// "client"
    Client(Client),
    /// Any other key, with its encoded value kept verbatim.
    Other {
        /// Record key.
        key: String,
        /// Encoded RLP item.
        raw: Vec<u8>,
    },
}

impl KnownEntry {
    /// Whether `key` has a dedicated entry type.
    pub fn is_known_key(key: &str) -> bool {
        keys::ALL.contains(&key)
    }

    /// Decode the raw value stored under `key`.
    ///
    /// Unrecognized keys are returned as [`KnownEntry::Other`] without
    /// inspecting the value.
    pub fn from_raw(key: &str, raw: &[u8]) -> Result<Self, KeyError> {
        let Some(mut entry) = Self::empty_for(key) else {
            trace!(key, size = raw.len(), "keeping unrecognized ENR key as raw value");
            return Ok(Self::Other {
                key: key.to_string(),
                raw: raw.to_vec(),
            });
        };
        entry
            .load_from(raw)
            .map_err(|cause| KeyError::new(key, cause))?;
        Ok(entry)
    }

    /// A default-valued entry of the type registered for `key`.
    fn empty_for(key: &str) -> Option<Self> {
        let entry = match key {
            keys::TCP => Self::Tcp(Tcp::default()),
            keys::TCP6 => Self::Tcp6(Tcp6::default()),
            keys::UDP => Self::Udp(Udp::default()),
            keys::UDP6 => Self::Udp6(Udp6::default()),
            keys::QUIC => Self::Quic(Quic::default()),
            keys::QUIC6 => Self::Quic6(Quic6::default()),
            keys::ID => Self::Id(Id::default()),
            keys::IP => Self::Ip(Ipv4Addr::default()),
            keys::IP6 => Self::Ip6(Ipv6Addr::default()),
            keys::CLIENT => Self::Client(Client::default()),
            _ => return None,
        };
        Some(entry)
    }
}

/// Run `$known` against whichever typed entry `$value` holds, or `$fallback`
/// for [`KnownEntry::Other`].
macro_rules! dispatch {
    ($value:expr, $e:ident => $known:expr, $other:pat => $fallback:expr) => {
        match $value {
            KnownEntry::Tcp($e) => $known,
            KnownEntry::Tcp6($e) => $known,
            KnownEntry::Udp($e) => $known,
            KnownEntry::Udp6($e) => $known,
            KnownEntry::Quic($e) => $known,
            KnownEntry::Quic6($e) => $known,
            KnownEntry::Id($e) => $known,
            KnownEntry::Ip($e) => $known,
            KnownEntry::Ip6($e) => $known,
            KnownEntry::Client($e) => $known,
            $other => $fallback,
        }
    };
}

impl Entry for KnownEntry {
    fn enr_key(&self) -> &str {
        dispatch!(self, e => e.enr_key(), KnownEntry::Other { key, .. } => key.as_str())
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        dispatch!(self, e => e.encode(s), KnownEntry::Other { raw, .. } => {
            s.append_raw(raw, 1);
            Ok(())
        })
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        dispatch!(self, e => e.decode(rlp), KnownEntry::Other { raw, .. } => {
            *raw = rlp.as_raw().to_vec();
            Ok(())
        })
    }
}

macro_rules! known_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for KnownEntry {
                fn from(entry: $ty) -> Self {
                    Self::$variant(entry)
                }
            }
        )*
    };
}

known_from!(
    Tcp => Tcp,
    Tcp6 => Tcp6,
    Udp => Udp,
    Udp6 => Udp6,
    Quic => Quic,
    Quic6 => Quic6,
    Id => Id,
    Ipv4Addr => Ip,
    Ipv6Addr => Ip6,
    Client => Client,
);
