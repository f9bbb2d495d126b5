//! Bearer TFT Fuzzer
//!
//! Feeds arbitrary bytes through Bearer TFT IE extraction and packet filter
//! list translation to find panics on malformed TFTs.
//!
//! Run with: cargo +nightly fuzz run fuzz_bearer_tft

#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use ogs_gtp::v2::{Gtp2Ie, Gtp2IeType};
use ogs_tft::{handle_tft, TftError};

fuzz_target!(|data: &[u8]| {
    let ie = Gtp2Ie::new(Gtp2IeType::BearerTft as u8, 0, Bytes::copy_from_slice(data));

    match handle_tft(&ie) {
        Ok(tft) => {
            let list = &tft.packet_filter_list;
            let populated = [
                !list.create_new_tft.is_empty(),
                !list.add_packet_filter.is_empty(),
                !list.replace_packet_filter.is_empty(),
            ];
            assert!(populated.iter().filter(|p| **p).count() <= 1);
        }
        Err(TftError::Extraction(_)) | Err(TftError::UnsupportedOperation(_)) => {}
        Err(e @ TftError::ComponentDecode { .. }) => {
            panic!("component error escaped translation: {e}");
        }
    }
});
