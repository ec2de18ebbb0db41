//! Domain Entities for ENR entries

use std::fmt;

/// IP address enum supporting both IPv4 and IPv6.
///
/// Unlike a bare byte slice, the family is part of the value: an IPv4-mapped
/// IPv6 address stays `V6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddr {
    /// IPv4 address (4 bytes).
    V4([u8; 4]),
    /// IPv6 address (16 bytes).
    V6([u8; 16]),
}

impl IpAddr {
    /// Create an IPv4 address
    pub fn v4(a: u8, b: u8, c: u8, d: u8) -> Self {
        IpAddr::V4([a, b, c, d])
    }

    /// Create an IPv6 address from bytes
    pub fn v6(bytes: [u8; 16]) -> Self {
        IpAddr::V6(bytes)
    }

    /// Check if this is an IPv4 address
    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpAddr::V4(_))
    }

    /// Check if this is an IPv6 address
    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpAddr::V6(_))
    }

    /// The address bytes, 4 or 16 long depending on the family.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IpAddr::V4(bytes) => bytes,
            IpAddr::V6(bytes) => bytes,
        }
    }
}

impl From<std::net::IpAddr> for IpAddr {
    fn from(addr: std::net::IpAddr) -> Self {
        match addr {
            std::net::IpAddr::V4(v4) => IpAddr::V4(v4.octets()),
            std::net::IpAddr::V6(v6) => IpAddr::V6(v6.octets()),
        }
    }
}

impl From<std::net::Ipv4Addr> for IpAddr {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        IpAddr::V4(addr.octets())
    }
}

impl From<std::net::Ipv6Addr> for IpAddr {
    fn from(addr: std::net::Ipv6Addr) -> Self {
        IpAddr::V6(addr.octets())
    }
}

impl From<IpAddr> for std::net::IpAddr {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(bytes) => std::net::IpAddr::from(bytes),
            IpAddr::V6(bytes) => std::net::IpAddr::from(bytes),
        }
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&std::net::IpAddr::from(*self), f)
    }
}
