//! # Address entries
//!
//! Two representations of the "ip"/"ip6" values:
//!
//! - **Raw** ([`Ip`], [`Ipv4`], [`Ipv6`]): a bare byte vector, 4 or 16 bytes.
//!   [`Ip`] picks its key from the address; the others fix it.
//! - **Structured** ([`Ipv4Addr`], [`Ipv6Addr`]): an [`IpAddr`](crate::domain::IpAddr)
//!   that carries its family, so a family mismatch is caught on encode and
//!   the decoded value remembers which family it came from.
//!
//! Both are wire-compatible: every variant stores exactly the 4 or 16 address
//! bytes as an RLP string.

mod raw;
mod structured;

pub use raw::{Ip, Ipv4, Ipv6};
pub use structured::{Ipv4Addr, Ipv6Addr};

/// Prefix of an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`).
const V4_IN_V6_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Narrow a raw address to its 4-byte form, if it has one.
pub(crate) fn to4(ip: &[u8]) -> Option<[u8; 4]> {
    match ip.len() {
        4 => ip.try_into().ok(),
        16 if ip[..12] == V4_IN_V6_PREFIX => ip[12..].try_into().ok(),
        _ => None,
    }
}

/// Widen a raw address to its 16-byte form. 4-byte input becomes IPv4-mapped.
pub(crate) fn to16(ip: &[u8]) -> Option<[u8; 16]> {
    match ip.len() {
        4 => {
            let mut out = [0u8; 16];
            out[..12].copy_from_slice(&V4_IN_V6_PREFIX);
            out[12..].copy_from_slice(ip);
            Some(out)
        }
        16 => ip.try_into().ok(),
        _ => None,
    }
}
