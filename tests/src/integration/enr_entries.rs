//! # ENR Entry Integration Tests
//!
//! Exercises the entry layer the way a record container uses it:
//!
//! 1. **Write path**: typed entries → `EntryService::set` → raw store
//! 2. **Read path**: raw store → `EntryService::load` / `KnownEntry` dispatch
//! 3. **Cross-representation**: raw-byte and structured address entries
//!    reading each other's values
//! 4. **Configuration**: limits loaded from a TOML file

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rlp::{DecoderError, RlpStream};

    use qc_enr_entries::test_utils::{populated_store, sample_client, sample_ipv4, sample_ipv6};
    use qc_enr_entries::{
        is_not_found, with_entry, Client, ConfigProvider, Entry, EntryConfig, EntryError,
        EntryService, Id, InMemoryRecordStore, Ip, IpAddr, Ipv4, Ipv4Addr, Ipv6, Ipv6Addr,
        KeyError, KnownEntry, Quic, RecordStore, Tcp, TomlConfigProvider, Udp, WithEntry, ID_V4,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn record() -> EntryService<InMemoryRecordStore> {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        EntryService::new(InMemoryRecordStore::new(), EntryConfig::default())
    }

    /// Raw RLP list of strings, as written by another implementation.
    fn string_list(items: &[&[u8]]) -> Vec<u8> {
        let mut s = RlpStream::new_list(items.len());
        for item in items {
            s.append(&item.to_vec());
        }
        s.out().to_vec()
    }

    fn raw_store(entries: &[(&str, Vec<u8>)]) -> EntryService<InMemoryRecordStore> {
        let store: InMemoryRecordStore = entries
            .iter()
            .map(|(key, raw)| (key.to_string(), raw.clone()))
            .collect();
        EntryService::new(store, EntryConfig::default())
    }

    // =============================================================================
    // WRITE + READ PATH
    // =============================================================================

    #[test]
    fn test_full_record_roundtrip() {
        let svc = EntryService::new(populated_store().unwrap(), EntryConfig::default());

        let mut id = Id::default();
        svc.load(&mut id).unwrap();
        assert_eq!(id.as_str(), ID_V4);

        let mut ip = Ipv4Addr::default();
        svc.load(&mut ip).unwrap();
        assert_eq!(ip, sample_ipv4());

        let mut ip6 = Ipv6Addr::default();
        svc.load(&mut ip6).unwrap();
        assert_eq!(ip6, sample_ipv6());

        let mut client = Client::default();
        svc.load(&mut client).unwrap();
        assert_eq!(client, sample_client());
    }

    #[test]
    fn test_populated_store_holds_every_fixture() {
        let store = populated_store().unwrap();
        assert_eq!(store.keys(), vec!["client", "id", "ip", "ip6", "tcp", "udp"]);
    }

    #[test]
    fn test_listing_follows_canonical_key_order() {
        let svc = EntryService::new(populated_store().unwrap(), EntryConfig::default());
        let keys: Vec<String> = svc
            .entries()
            .unwrap()
            .iter()
            .map(|e| e.enr_key().to_string())
            .collect();
        assert_eq!(keys, vec!["client", "id", "ip", "ip6", "tcp", "udp"]);
    }

    #[test]
    fn test_generic_ip_writes_family_key() {
        let mut svc = record();
        let v4: std::net::IpAddr = "192.0.2.1".parse().unwrap();
        let v6: std::net::IpAddr = "2001:db8::1".parse().unwrap();

        svc.set(&Ip::from(v4)).unwrap();
        svc.set(&Ip::from(v6)).unwrap();
        assert_eq!(svc.store().keys(), vec!["ip", "ip6"]);

        let mut ipv4 = Ipv4::default();
        svc.load(&mut ipv4).unwrap();
        assert_eq!(ipv4.0, vec![192, 0, 2, 1]);

        let mut ipv6 = Ipv6::default();
        svc.load(&mut ipv6).unwrap();
        assert_eq!(ipv6, Ipv6::from("2001:db8::1".parse::<std::net::Ipv6Addr>().unwrap()));
    }

    #[test]
    fn test_raw_and_structured_entries_interoperate() {
        let mut svc = record();
        svc.set(&Ipv4(vec![10, 0, 0, 7])).unwrap();
        svc.set(&Ipv6Addr(IpAddr::v6([0xfd; 16]))).unwrap();

        let mut structured = Ipv4Addr::default();
        svc.load(&mut structured).unwrap();
        assert_eq!(structured.0, IpAddr::v4(10, 0, 0, 7));

        let mut raw = Ipv6::default();
        svc.load(&mut raw).unwrap();
        assert_eq!(raw.0, vec![0xfd; 16]);
    }

    #[test]
    fn test_generic_entry_reads_back_into_owned_slot() {
        let mut svc = record();
        svc.set(&with_entry("eth2", vec![0xaau8; 16])).unwrap();
        svc.set(&with_entry("attnets", 0xffu64)).unwrap();

        let mut eth2: WithEntry<Vec<u8>> = WithEntry::empty("eth2");
        svc.load(&mut eth2).unwrap();
        assert_eq!(eth2.value(), &vec![0xaa; 16]);

        let mut attnets: WithEntry<u64> = WithEntry::empty("attnets");
        svc.load(&mut attnets).unwrap();
        assert_eq!(attnets.into_value(), 0xff);

        assert!(matches!(
            svc.load_known("eth2").unwrap(),
            KnownEntry::Other { .. }
        ));
    }

    // =============================================================================
    // ERROR CLASSIFICATION
    // =============================================================================

    #[test]
    fn test_missing_versus_invalid() {
        let mut svc = record();
        svc.set(&with_entry("udp", 70_000u32)).unwrap();

        let missing = svc.load(&mut Quic::default()).unwrap_err();
        let invalid = svc.load(&mut Udp::default()).unwrap_err();

        assert!(is_not_found(&missing));
        assert!(!is_not_found(&invalid));
        assert_eq!(invalid.key, "udp");
        assert!(matches!(invalid.cause, EntryError::Codec(_)));
    }

    #[test]
    fn test_wrong_family_written_into_ip_slot() {
        let mut svc = record();
        // Sixteen bytes stored under "ip" by a misbehaving writer.
        svc.set(&with_entry("ip", vec![0u8; 16])).unwrap();

        let err = svc.load(&mut Ipv4::default()).unwrap_err();
        assert!(matches!(err.cause, EntryError::InvalidIpv4Length(_)));

        let err = svc.load(&mut Ipv4Addr::default()).unwrap_err();
        assert!(matches!(err.cause, EntryError::Codec(_)));
    }

    #[test]
    fn test_client_bounds_at_record_level() {
        let mut svc = record();

        let err = svc.set(&Client([Some("geth".into()), None, None])).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"ENR key "client": invalid client info length: 1"#
        );
        assert!(!svc.contains("client"));

        svc.set(&Client::with_extra("geth", "1.10.0", "linux-amd64")).unwrap();
        let mut client = Client::default();
        svc.load(&mut client).unwrap();
        assert_eq!(client.extra(), Some("linux-amd64"));
    }

    #[test]
    fn test_foreign_client_lists() {
        let svc = raw_store(&[(
            "client",
            string_list(&[b"geth", b"1.10.0", b"linux", b"extra"]),
        )]);
        let err = svc.load(&mut Client::default()).unwrap_err();
        assert_eq!(err.cause, EntryError::InvalidClientLength(4));

        let svc = raw_store(&[("client", string_list(&[b"geth", &[0xff, 0xfe]]))]);
        let err = svc.load(&mut Client::default()).unwrap_err();
        assert_eq!(err.cause, EntryError::Codec(DecoderError::RlpExpectedToBeData));
    }

    #[test]
    fn test_list_under_ip_key_is_rejected() {
        let svc = raw_store(&[("ip", string_list(&[&[10], &[0], &[0], &[1]]))]);

        let err = svc.load(&mut Ipv4Addr::default()).unwrap_err();
        assert_eq!(err.key, "ip");
        assert_eq!(err.cause, EntryError::Codec(DecoderError::RlpExpectedToBeData));
        assert!(svc.load_known("ip").is_err());
        assert!(svc.load(&mut Ipv4::default()).is_err());
    }

    #[test]
    fn test_key_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(KeyError::not_found("tcp"));
        assert!(is_not_found(err.as_ref()));
        assert_eq!(err.source().map(|s| s.to_string()), Some("not found".to_string()));
    }

    // =============================================================================
    // CONFIGURATION
    // =============================================================================

    #[test]
    fn test_limits_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[entries]\nmax_value_size = 8\nallow_unknown_keys = false").unwrap();

        let provider = TomlConfigProvider::load(file.path()).unwrap();
        assert_eq!(provider.get_entry_config().max_value_size, 8);

        let mut svc = EntryService::with_provider(InMemoryRecordStore::new(), &provider);
        assert!(svc.set(&Tcp(30303)).is_ok());

        let err = svc.set(&Client::new("geth", "1.10.0")).unwrap_err();
        assert!(matches!(err.cause, EntryError::ValueTooLarge { max: 8, .. }));

        let err = svc.set(&with_entry("eth", 1u8)).unwrap_err();
        assert_eq!(err.cause, EntryError::UnknownKey);
    }
}
