//! Structured-address entries.

use rlp::{DecoderError, Rlp, RlpStream};

use crate::domain::entities::IpAddr;
use crate::domain::entry::{keys, Entry};
use crate::domain::errors::EntryError;

/// The "ip" key, backed by a structured address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Addr(pub IpAddr);

impl Default for Ipv4Addr {
    fn default() -> Self {
        Self(IpAddr::V4([0; 4]))
    }
}

impl Entry for Ipv4Addr {
    fn enr_key(&self) -> &str {
        keys::IP
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        let IpAddr::V4(bytes) = self.0 else {
            return Err(EntryError::NotIpv4);
        };
        s.append(&bytes.to_vec());
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        self.0 = IpAddr::V4(read_fixed::<4>(rlp)?);
        Ok(())
    }
}

/// The "ip6" key, backed by a structured address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Addr(pub IpAddr);

impl Default for Ipv6Addr {
    fn default() -> Self {
        Self(IpAddr::V6([0; 16]))
    }
}

impl Entry for Ipv6Addr {
    fn enr_key(&self) -> &str {
        keys::IP6
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        let IpAddr::V6(bytes) = self.0 else {
            return Err(EntryError::NotIpv6);
        };
        s.append(&bytes.to_vec());
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        self.0 = IpAddr::V6(read_fixed::<16>(rlp)?);
        Ok(())
    }
}

impl From<std::net::Ipv4Addr> for Ipv4Addr {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Self(addr.into())
    }
}

impl From<std::net::Ipv6Addr> for Ipv6Addr {
    fn from(addr: std::net::Ipv6Addr) -> Self {
        Self(addr.into())
    }
}

/// Read an RLP string of exactly `N` bytes.
///
/// Width mismatches are codec errors, like any other malformed string.
/// Lists are rejected even when their payload has the right width.
fn read_fixed<const N: usize>(rlp: &Rlp<'_>) -> Result<[u8; N], DecoderError> {
    if !rlp.is_data() {
        return Err(DecoderError::RlpExpectedToBeData);
    }
    let data = rlp.data()?;
    if data.len() < N {
        return Err(DecoderError::RlpIsTooShort);
    }
    if data.len() > N {
        return Err(DecoderError::RlpIsTooBig);
    }
    let mut out = [0u8; N];
    out.copy_from_slice(data);
    Ok(out)
}
