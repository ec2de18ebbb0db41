//! Test fixtures for code that consumes node record entries.

use crate::adapters::InMemoryRecordStore;
use crate::domain::{Client, Entry, Id, IpAddr, Ipv4Addr, Ipv6Addr, KeyError, Tcp, Udp};
use crate::ports::RecordStore;

/// Client info of a typical execution client.
pub fn sample_client() -> Client {
    Client::new("geth", "1.10.0")
}

/// Documentation-range IPv4 address (192.0.2.1).
pub fn sample_ipv4() -> Ipv4Addr {
    Ipv4Addr(IpAddr::v4(192, 0, 2, 1))
}

/// Documentation-range IPv6 address (2001:db8::1).
pub fn sample_ipv6() -> Ipv6Addr {
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&[0x20, 0x01, 0x0d, 0xb8]);
    bytes[15] = 1;
    Ipv6Addr(IpAddr::V6(bytes))
}

/// Store holding id, ip, ip6, tcp, udp and client entries of a v4 node.
///
/// Fails with the offending key if a fixture does not encode.
pub fn populated_store() -> Result<InMemoryRecordStore, KeyError> {
    let entries: [&dyn Entry; 6] = [
        &Id::v4(),
        &sample_ipv4(),
        &sample_ipv6(),
        &Tcp(30303),
        &Udp(30303),
        &sample_client(),
    ];

    let mut store = InMemoryRecordStore::new();
    for entry in entries {
        let raw = entry
            .to_rlp_bytes()
            .map_err(|cause| KeyError::new(entry.enr_key(), cause))?;
        store.insert(entry.enr_key().to_string(), raw);
    }
    Ok(store)
}
