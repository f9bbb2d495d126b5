//! Bearer Context integration tests
//!
//! Decodes a Bearer Context grouped IE as received in a Create Bearer Request,
//! locates its Bearer TFT and translates it into a packet filter list.

use bytes::Bytes;
use ogs_gtp::v2::{find_ie, pf_type, Gtp2Ie, Gtp2IeType};
use ogs_tft::{handle_tft, IpRemoteAddress, TftConfig, TftError, TftTranslator};

#[rustfmt::skip]
const BEARER_CONTEXT: &[u8] = &[
    93, 0x00, 0x22, 0x00,               // Bearer Context, length 34
    73, 0x00, 0x01, 0x00, 0x05,         // EBI 5
    84, 0x00, 0x19, 0x00,               // Bearer TFT, length 25
    0x22,                               // Create new TFT, 2 packet filters
    0x31, 0x10, 0x0e,                   // bidirectional, id 1, precedence 16
    0x10, 10, 45, 0, 0, 255, 255, 0, 0, // IPv4 remote address 10.45.0.0/16
    0x30, 0x11,                         // UDP
    0x50, 0x13, 0xc4,                   // remote port 5060
    0x12, 0x20, 0x04,                   // downlink, id 2, precedence 32
    0x51, 0x1f, 0x40, 0x1f,             // remote port range, one octet short
];

fn bearer_tft_ie() -> Gtp2Ie {
    let mut buf = Bytes::from_static(BEARER_CONTEXT);
    let ctx = Gtp2Ie::decode(&mut buf).unwrap();
    let members = ctx.grouped().unwrap();
    find_ie(&members, Gtp2IeType::BearerTft, 0).unwrap().clone()
}

#[test]
fn test_create_bearer_tft_translation() {
    let _ = env_logger::try_init();

    let tft = handle_tft(&bearer_tft_ie()).unwrap();
    assert_eq!(tft.tft_operation_code, 1);

    let list = &tft.packet_filter_list;
    assert!(list.add_packet_filter.is_empty());
    assert!(list.replace_packet_filter.is_empty());

    // Filter 2 has only a malformed component, so nothing of it survives
    let out = &list.create_new_tft;
    assert_eq!(out.len(), 3);
    for pf in out {
        assert_eq!(pf.direction, 3);
        assert_eq!(pf.identifier, 1);
        assert_eq!(pf.eval_precedence, 16);
        assert_eq!(pf.length, 14);
    }

    assert_eq!(out[0].packet_filter_contents.flags, pf_type::IPV4_REMOTE_ADDRESS as u32);
    assert_eq!(
        out[0].packet_filter_contents.ipv4_remote_addresses,
        vec![IpRemoteAddress {
            addr: 0x0a2d0000,
            mask: 0xffff0000
        }]
    );
    assert_eq!(out[1].packet_filter_contents.protocol_identifier_nextheader, 17);
    assert_eq!(out[2].packet_filter_contents.single_remote_port, 5060);
}

#[test]
fn test_translator_from_yaml_config() {
    let _ = env_logger::try_init();

    let config = TftConfig::from_yaml("skip_report_level: debug\n").unwrap();
    let translator = TftTranslator::from_config(&config);

    let tft = translator.handle_tft(&bearer_tft_ie()).unwrap();
    assert_eq!(tft.packet_filter_list.packet_filters().len(), 3);
}

#[test]
fn test_non_tft_member_is_extraction_error() {
    let mut buf = Bytes::from_static(BEARER_CONTEXT);
    let ctx = Gtp2Ie::decode(&mut buf).unwrap();
    let members = ctx.grouped().unwrap();
    let ebi = find_ie(&members, Gtp2IeType::Ebi, 0).unwrap();

    assert!(matches!(handle_tft(ebi), Err(TftError::Extraction(_))));
}
