//! Packet filter list model
//!
//! The application-facing traffic flow template handed to session and policy
//! logic. Field names follow the consumer's message definitions; encoding them
//! is left to the consumer's serialization layer.

use serde::{Deserialize, Serialize};

/// Remote address and mask, each as a big-endian 32-bit value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRemoteAddress {
    pub addr: u32,
    pub mask: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    pub low_limit: u32,
    pub high_limit: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOfServiceTrafficClass {
    pub value: u32,
    pub mask: u32,
}

/// Contents of one packet filter component.
///
/// Only the field matching `flags` is populated. Readers must switch on
/// `flags` rather than on which fields look set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketFilterContents {
    /// Component type identifier
    pub flags: u32,
    pub ipv4_remote_addresses: Vec<IpRemoteAddress>,
    pub ipv6_remote_addresses: Vec<IpRemoteAddress>,
    pub protocol_identifier_nextheader: u32,
    pub single_local_port: u32,
    pub single_remote_port: u32,
    pub local_port_range: Option<PortRange>,
    pub remote_port_range: Option<PortRange>,
    pub security_parameter_index: u32,
    pub type_of_service_traffic_class: Option<TypeOfServiceTrafficClass>,
}

impl PacketFilterContents {
    /// Empty contents tagged with a component type
    pub fn tagged(flags: u32) -> Self {
        Self {
            flags,
            ..Default::default()
        }
    }
}

/// One packet filter component together with its filter's metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketFilter {
    pub spare: u32,
    pub direction: u32,
    pub identifier: u32,
    pub eval_precedence: u32,
    pub length: u32,
    pub packet_filter_contents: PacketFilterContents,
}

/// Packet filters routed by TFT operation code.
///
/// At most one of the lists is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketFilterList {
    pub create_new_tft: Vec<PacketFilter>,
    pub add_packet_filter: Vec<PacketFilter>,
    pub replace_packet_filter: Vec<PacketFilter>,
}

impl PacketFilterList {
    pub fn is_empty(&self) -> bool {
        self.create_new_tft.is_empty()
            && self.add_packet_filter.is_empty()
            && self.replace_packet_filter.is_empty()
    }

    /// The populated list, if any
    pub fn packet_filters(&self) -> &[PacketFilter] {
        [
            &self.create_new_tft,
            &self.add_packet_filter,
            &self.replace_packet_filter,
        ]
        .into_iter()
        .find(|list| !list.is_empty())
        .map_or(&[][..], |list| list.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficFlowTemplate {
    pub packet_filter_list: PacketFilterList,
    /// Raw TFT operation code
    pub tft_operation_code: u32,
}
