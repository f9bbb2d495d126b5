//! GTPv2 Protocol Implementation
//!
//! This module implements the GTPv2-C (Control Plane) IEs needed to carry
//! bearer traffic flow templates, as specified in 3GPP TS 29.274.

pub mod ie;
pub mod tft;

// Re-export IE types
pub use ie::{find_ie, Gtp2Ie, Gtp2IeType, GTP2_IE_HDR_LEN};

// Re-export TFT types
pub use tft::{
    pf_type, pf_type_name, BearerTft, TftOperationCode, TftPacketFilter, TftParameter,
    TftPfComponent, MAX_NUM_OF_PACKET_FILTER,
};
