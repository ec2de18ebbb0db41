//! Raw-byte address entries.

use rlp::{Rlp, RlpStream};

use super::{to16, to4};
use crate::domain::entry::{keys, Entry};
use crate::domain::errors::{fmt_ip_bytes, EntryError};

/// Either the "ip" or "ip6" key, depending on the value.
///
/// Use this to write an address that can be either family without deciding
/// the key up front. To read a specific family use [`Ipv4`] / [`Ipv6`] or the
/// structured entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ip(pub Vec<u8>);

impl Entry for Ip {
    fn enr_key(&self) -> &str {
        if to4(&self.0).is_some() {
            keys::IP
        } else {
            keys::IP6
        }
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        if let Some(ip4) = to4(&self.0) {
            s.append(&ip4.to_vec());
        } else if let Some(ip6) = to16(&self.0) {
            s.append(&ip6.to_vec());
        } else {
            return Err(EntryError::InvalidIp(fmt_ip_bytes(&self.0)));
        }
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        let bytes: Vec<u8> = rlp.as_val()?;
        if bytes.len() != 4 && bytes.len() != 16 {
            return Err(EntryError::InvalidIpLength(fmt_ip_bytes(&bytes)));
        }
        self.0 = bytes;
        Ok(())
    }
}

/// The "ip" key, which holds the IPv4 address of the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ipv4(pub Vec<u8>);

impl Entry for Ipv4 {
    fn enr_key(&self) -> &str {
        keys::IP
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        let ip4 = to4(&self.0).ok_or_else(|| EntryError::InvalidIpv4(fmt_ip_bytes(&self.0)))?;
        s.append(&ip4.to_vec());
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        let bytes: Vec<u8> = rlp.as_val()?;
        if bytes.len() != 4 {
            return Err(EntryError::InvalidIpv4Length(fmt_ip_bytes(&bytes)));
        }
        self.0 = bytes;
        Ok(())
    }
}

/// The "ip6" key, which holds the IPv6 address of the node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ipv6(pub Vec<u8>);

impl Entry for Ipv6 {
    fn enr_key(&self) -> &str {
        keys::IP6
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        let ip6 = to16(&self.0).ok_or_else(|| EntryError::InvalidIpv6(fmt_ip_bytes(&self.0)))?;
        s.append(&ip6.to_vec());
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        let bytes: Vec<u8> = rlp.as_val()?;
        if bytes.len() != 16 {
            return Err(EntryError::InvalidIpv6Length(fmt_ip_bytes(&bytes)));
        }
        self.0 = bytes;
        Ok(())
    }
}

impl From<std::net::IpAddr> for Ip {
    fn from(addr: std::net::IpAddr) -> Self {
        match addr {
            std::net::IpAddr::V4(v4) => Self(v4.octets().to_vec()),
            std::net::IpAddr::V6(v6) => Self(v6.octets().to_vec()),
        }
    }
}

impl From<std::net::Ipv4Addr> for Ipv4 {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Self(addr.octets().to_vec())
    }
}

impl From<std::net::Ipv6Addr> for Ipv6 {
    fn from(addr: std::net::Ipv6Addr) -> Self {
        Self(addr.octets().to_vec())
    }
}
