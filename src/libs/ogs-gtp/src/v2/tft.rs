//! Bearer TFT (Traffic Flow Template)
//!
//! Decoding of the Bearer TFT IE value, whose layout is the traffic flow
//! template IE of 3GPP TS 24.008 section 10.5.6.12 without its type and length
//! octets.

use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use crate::error::{GtpError, GtpResult};
use super::ie::{Gtp2Ie, Gtp2IeType};

/// The packet filter count is a 4-bit field
pub const MAX_NUM_OF_PACKET_FILTER: usize = 15;

/// Packet filter component type identifiers
pub mod pf_type {
    pub const IPV4_REMOTE_ADDRESS: u8 = 0x10;
    pub const IPV4_LOCAL_ADDRESS: u8 = 0x11;
    pub const IPV6_REMOTE_ADDRESS: u8 = 0x20;
    pub const IPV6_REMOTE_ADDRESS_PREFIX_LENGTH: u8 = 0x21;
    pub const IPV6_LOCAL_ADDRESS_PREFIX_LENGTH: u8 = 0x23;
    pub const PROTOCOL_IDENTIFIER_NEXT_HEADER: u8 = 0x30;
    pub const SINGLE_LOCAL_PORT: u8 = 0x40;
    pub const LOCAL_PORT_RANGE: u8 = 0x41;
    pub const SINGLE_REMOTE_PORT: u8 = 0x50;
    pub const REMOTE_PORT_RANGE: u8 = 0x51;
    pub const SECURITY_PARAMETER_INDEX: u8 = 0x60;
    pub const TYPE_OF_SERVICE_TRAFFIC_CLASS: u8 = 0x70;
    pub const FLOW_LABEL: u8 = 0x80;
}

/// Payload length of a component type, excluding the type octet
fn pf_component_len(pf_type: u8) -> Option<usize> {
    match pf_type {
        pf_type::IPV4_REMOTE_ADDRESS | pf_type::IPV4_LOCAL_ADDRESS => Some(8),
        pf_type::IPV6_REMOTE_ADDRESS => Some(32),
        pf_type::IPV6_REMOTE_ADDRESS_PREFIX_LENGTH
        | pf_type::IPV6_LOCAL_ADDRESS_PREFIX_LENGTH => Some(17),
        pf_type::PROTOCOL_IDENTIFIER_NEXT_HEADER => Some(1),
        pf_type::SINGLE_LOCAL_PORT | pf_type::SINGLE_REMOTE_PORT => Some(2),
        pf_type::LOCAL_PORT_RANGE | pf_type::REMOTE_PORT_RANGE => Some(4),
        pf_type::SECURITY_PARAMETER_INDEX => Some(4),
        pf_type::TYPE_OF_SERVICE_TRAFFIC_CLASS => Some(2),
        pf_type::FLOW_LABEL => Some(3),
        _ => None,
    }
}

/// Human readable name of a component type
pub fn pf_type_name(pf_type: u8) -> &'static str {
    match pf_type {
        pf_type::IPV4_REMOTE_ADDRESS => "IPv4 remote address",
        pf_type::IPV4_LOCAL_ADDRESS => "IPv4 local address",
        pf_type::IPV6_REMOTE_ADDRESS => "IPv6 remote address",
        pf_type::IPV6_REMOTE_ADDRESS_PREFIX_LENGTH => "IPv6 remote address/prefix length",
        pf_type::IPV6_LOCAL_ADDRESS_PREFIX_LENGTH => "IPv6 local address/prefix length",
        pf_type::PROTOCOL_IDENTIFIER_NEXT_HEADER => "Protocol identifier/Next header",
        pf_type::SINGLE_LOCAL_PORT => "Single local port",
        pf_type::LOCAL_PORT_RANGE => "Local port range",
        pf_type::SINGLE_REMOTE_PORT => "Single remote port",
        pf_type::REMOTE_PORT_RANGE => "Remote port range",
        pf_type::SECURITY_PARAMETER_INDEX => "Security parameter index",
        pf_type::TYPE_OF_SERVICE_TRAFFIC_CLASS => "Type of service/Traffic class",
        pf_type::FLOW_LABEL => "Flow label",
        _ => "Unknown",
    }
}

/// TFT operation code (3 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TftOperationCode {
    Spare = 0,
    CreateNewTft = 1,
    DeleteExistingTft = 2,
    AddPacketFiltersToExistingTft = 3,
    ReplacePacketFiltersInExistingTft = 4,
    DeletePacketFiltersFromExistingTft = 5,
    NoTftOperation = 6,
    Reserved = 7,
}

impl From<u8> for TftOperationCode {
    fn from(value: u8) -> Self {
        match value & 0x07 {
            1 => Self::CreateNewTft,
            2 => Self::DeleteExistingTft,
            3 => Self::AddPacketFiltersToExistingTft,
            4 => Self::ReplacePacketFiltersInExistingTft,
            5 => Self::DeletePacketFiltersFromExistingTft,
            6 => Self::NoTftOperation,
            7 => Self::Reserved,
            _ => Self::Spare,
        }
    }
}

impl TftOperationCode {
    /// Whether the packet filter list carries full packet filters
    pub fn carries_packet_filters(self) -> bool {
        matches!(
            self,
            Self::CreateNewTft
                | Self::AddPacketFiltersToExistingTft
                | Self::ReplacePacketFiltersInExistingTft
        )
    }
}

/// Packet filter component
///
/// Holds the raw payload of one component. The typed accessors check the tag
/// and the payload length, so a component that was framed from a truncated
/// filter fails only when it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TftPfComponent {
    /// Component type identifier
    pub pf_type: u8,
    /// Component payload
    pub contents: Bytes,
}

impl TftPfComponent {
    pub fn new(pf_type: u8, contents: Bytes) -> Self {
        Self { pf_type, contents }
    }

    pub fn from_ipv4_remote_address(addr: Ipv4Addr, mask: Ipv4Addr) -> Self {
        let mut buf = BytesMut::with_capacity(8);
        buf.put_slice(&addr.octets());
        buf.put_slice(&mask.octets());
        Self::new(pf_type::IPV4_REMOTE_ADDRESS, buf.freeze())
    }

    pub fn from_ipv6_remote_address(addr: Ipv6Addr, mask: Ipv6Addr) -> Self {
        let mut buf = BytesMut::with_capacity(32);
        buf.put_slice(&addr.octets());
        buf.put_slice(&mask.octets());
        Self::new(pf_type::IPV6_REMOTE_ADDRESS, buf.freeze())
    }

    pub fn from_protocol_identifier(protocol: u8) -> Self {
        Self::new(
            pf_type::PROTOCOL_IDENTIFIER_NEXT_HEADER,
            Bytes::copy_from_slice(&[protocol]),
        )
    }

    pub fn from_single_local_port(port: u16) -> Self {
        Self::new(pf_type::SINGLE_LOCAL_PORT, Bytes::copy_from_slice(&port.to_be_bytes()))
    }

    pub fn from_single_remote_port(port: u16) -> Self {
        Self::new(pf_type::SINGLE_REMOTE_PORT, Bytes::copy_from_slice(&port.to_be_bytes()))
    }

    pub fn from_local_port_range(low: u16, high: u16) -> Self {
        Self::new(pf_type::LOCAL_PORT_RANGE, Self::port_range_bytes(low, high))
    }

    pub fn from_remote_port_range(low: u16, high: u16) -> Self {
        Self::new(pf_type::REMOTE_PORT_RANGE, Self::port_range_bytes(low, high))
    }

    pub fn from_security_parameter_index(spi: u32) -> Self {
        Self::new(
            pf_type::SECURITY_PARAMETER_INDEX,
            Bytes::copy_from_slice(&spi.to_be_bytes()),
        )
    }

    pub fn from_type_of_service_traffic_class(value: u8, mask: u8) -> Self {
        Self::new(
            pf_type::TYPE_OF_SERVICE_TRAFFIC_CLASS,
            Bytes::copy_from_slice(&[value, mask]),
        )
    }

    fn port_range_bytes(low: u16, high: u16) -> Bytes {
        let mut buf = BytesMut::with_capacity(4);
        buf.put_u16(low);
        buf.put_u16(high);
        buf.freeze()
    }

    fn payload(&self, expected_type: u8, expected_len: usize) -> GtpResult<&[u8]> {
        if self.pf_type != expected_type {
            return Err(GtpError::InvalidFormat(format!(
                "component type {:#04x} is not {}",
                self.pf_type,
                pf_type_name(expected_type)
            )));
        }
        if self.contents.len() != expected_len {
            return Err(GtpError::InvalidIeLength {
                expected: expected_len,
                actual: self.contents.len(),
            });
        }
        Ok(&self.contents[..])
    }

    /// IPv4 remote address and mask
    pub fn ipv4_remote_address(&self) -> GtpResult<(Ipv4Addr, Ipv4Addr)> {
        let mut p = self.payload(pf_type::IPV4_REMOTE_ADDRESS, 8)?;
        let addr = Ipv4Addr::from(p.get_u32());
        let mask = Ipv4Addr::from(p.get_u32());
        Ok((addr, mask))
    }

    /// IPv6 remote address and mask
    pub fn ipv6_remote_address(&self) -> GtpResult<(Ipv6Addr, Ipv6Addr)> {
        let mut p = self.payload(pf_type::IPV6_REMOTE_ADDRESS, 32)?;
        let addr = Ipv6Addr::from(p.get_u128());
        let mask = Ipv6Addr::from(p.get_u128());
        Ok((addr, mask))
    }

    pub fn protocol_identifier_next_header(&self) -> GtpResult<u8> {
        let mut p = self.payload(pf_type::PROTOCOL_IDENTIFIER_NEXT_HEADER, 1)?;
        Ok(p.get_u8())
    }

    pub fn single_local_port(&self) -> GtpResult<u16> {
        let mut p = self.payload(pf_type::SINGLE_LOCAL_PORT, 2)?;
        Ok(p.get_u16())
    }

    pub fn single_remote_port(&self) -> GtpResult<u16> {
        let mut p = self.payload(pf_type::SINGLE_REMOTE_PORT, 2)?;
        Ok(p.get_u16())
    }

    /// Local port range as (low limit, high limit)
    pub fn local_port_range(&self) -> GtpResult<(u16, u16)> {
        let mut p = self.payload(pf_type::LOCAL_PORT_RANGE, 4)?;
        Ok((p.get_u16(), p.get_u16()))
    }

    /// Remote port range as (low limit, high limit)
    pub fn remote_port_range(&self) -> GtpResult<(u16, u16)> {
        let mut p = self.payload(pf_type::REMOTE_PORT_RANGE, 4)?;
        Ok((p.get_u16(), p.get_u16()))
    }

    pub fn security_parameter_index(&self) -> GtpResult<u32> {
        let mut p = self.payload(pf_type::SECURITY_PARAMETER_INDEX, 4)?;
        Ok(p.get_u32())
    }

    /// Type of service/traffic class as (value, mask)
    pub fn type_of_service_traffic_class(&self) -> GtpResult<(u8, u8)> {
        let mut p = self.payload(pf_type::TYPE_OF_SERVICE_TRAFFIC_CLASS, 2)?;
        Ok((p.get_u8(), p.get_u8()))
    }

    /// Encoded length including the type octet
    pub fn encoded_len(&self) -> usize {
        1 + self.contents.len()
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u8(self.pf_type);
        buf.put_slice(&self.contents);
    }
}

/// Split packet filter contents into components.
///
/// Unknown types consume the rest of the contents. A known type that runs
/// past the end keeps whatever bytes are left.
fn decode_components(mut contents: Bytes) -> Vec<TftPfComponent> {
    let mut components = Vec::new();
    while contents.has_remaining() {
        let pf_type = contents.get_u8();
        let len = match pf_component_len(pf_type) {
            Some(len) => len.min(contents.remaining()),
            None => contents.remaining(),
        };
        components.push(TftPfComponent::new(pf_type, contents.copy_to_bytes(len)));
    }
    components
}

/// TFT packet filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TftPacketFilter {
    /// Packet filter direction (2 bits)
    pub direction: u8,
    /// Packet filter identifier (4 bits)
    pub identifier: u8,
    pub evaluation_precedence: u8,
    /// Length of the packet filter contents
    pub length: u8,
    pub components: Vec<TftPfComponent>,
}

impl TftPacketFilter {
    pub fn new(
        direction: u8,
        identifier: u8,
        evaluation_precedence: u8,
        components: Vec<TftPfComponent>,
    ) -> GtpResult<Self> {
        let length = contents_len(&components)?;
        Ok(Self {
            direction: direction & 0x03,
            identifier: identifier & 0x0F,
            evaluation_precedence,
            length,
            components,
        })
    }

    pub fn decode(buf: &mut Bytes) -> GtpResult<Self> {
        if buf.remaining() < 3 {
            return Err(GtpError::BufferTooShort {
                needed: 3,
                available: buf.remaining(),
            });
        }

        let flags = buf.get_u8();
        let evaluation_precedence = buf.get_u8();
        let length = buf.get_u8();

        if buf.remaining() < length as usize {
            return Err(GtpError::BufferTooShort {
                needed: length as usize,
                available: buf.remaining(),
            });
        }

        let contents = buf.copy_to_bytes(length as usize);
        Ok(Self {
            direction: (flags >> 4) & 0x03,
            identifier: flags & 0x0F,
            evaluation_precedence,
            length,
            components: decode_components(contents),
        })
    }

    pub fn encode(&self, buf: &mut BytesMut) -> GtpResult<()> {
        let length = contents_len(&self.components)?;
        buf.put_u8(((self.direction & 0x03) << 4) | (self.identifier & 0x0F));
        buf.put_u8(self.evaluation_precedence);
        buf.put_u8(length);
        for component in &self.components {
            component.encode(buf);
        }
        Ok(())
    }
}

/// Packet filter contents length, which must fit its one-octet field
fn contents_len(components: &[TftPfComponent]) -> GtpResult<u8> {
    let length: usize = components.iter().map(TftPfComponent::encoded_len).sum();
    u8::try_from(length).map_err(|_| GtpError::InvalidIeLength {
        expected: u8::MAX as usize,
        actual: length,
    })
}

/// TFT parameter (present when the E bit is set)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TftParameter {
    pub identifier: u8,
    pub contents: Bytes,
}

/// Bearer TFT IE value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerTft {
    pub operation_code: TftOperationCode,
    /// Packet filters (create, add and replace operations)
    pub packet_filters: Vec<TftPacketFilter>,
    /// Packet filter identifiers (delete packet filters operation)
    pub packet_filter_identifiers: Vec<u8>,
    pub parameters: Vec<TftParameter>,
}

impl BearerTft {
    pub fn new(operation_code: TftOperationCode) -> Self {
        Self {
            operation_code,
            packet_filters: Vec::new(),
            packet_filter_identifiers: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_packet_filters(
        operation_code: TftOperationCode,
        packet_filters: Vec<TftPacketFilter>,
    ) -> Self {
        Self {
            packet_filters,
            ..Self::new(operation_code)
        }
    }

    /// Number of packet filters field as it goes on the wire
    pub fn num_of_packet_filter(&self) -> usize {
        match self.operation_code {
            TftOperationCode::DeletePacketFiltersFromExistingTft => {
                self.packet_filter_identifiers.len()
            }
            op if op.carries_packet_filters() => self.packet_filters.len(),
            _ => 0,
        }
    }

    pub fn decode(value: &Bytes) -> GtpResult<Self> {
        let mut buf = value.clone();
        if !buf.has_remaining() {
            return Err(GtpError::BufferTooShort {
                needed: 1,
                available: 0,
            });
        }

        let first = buf.get_u8();
        let mut tft = Self::new(TftOperationCode::from(first >> 5));
        let e_bit = first & 0x10 != 0;
        let count = (first & 0x0F) as usize;

        match tft.operation_code {
            TftOperationCode::DeletePacketFiltersFromExistingTft => {
                if buf.remaining() < count {
                    return Err(GtpError::BufferTooShort {
                        needed: count,
                        available: buf.remaining(),
                    });
                }
                for _ in 0..count {
                    tft.packet_filter_identifiers.push(buf.get_u8() & 0x0F);
                }
            }
            op if op.carries_packet_filters() => {
                for _ in 0..count {
                    tft.packet_filters.push(TftPacketFilter::decode(&mut buf)?);
                }
            }
            _ => {}
        }

        if e_bit {
            while buf.has_remaining() {
                if buf.remaining() < 2 {
                    return Err(GtpError::BufferTooShort {
                        needed: 2,
                        available: buf.remaining(),
                    });
                }
                let identifier = buf.get_u8();
                let length = buf.get_u8() as usize;
                if buf.remaining() < length {
                    return Err(GtpError::BufferTooShort {
                        needed: length,
                        available: buf.remaining(),
                    });
                }
                tft.parameters.push(TftParameter {
                    identifier,
                    contents: buf.copy_to_bytes(length),
                });
            }
        }

        Ok(tft)
    }

    /// Encode the TFT value. Nothing is written if the TFT does not fit
    /// its length fields.
    pub fn encode(&self, buf: &mut BytesMut) -> GtpResult<()> {
        let count = self.num_of_packet_filter();
        if count > MAX_NUM_OF_PACKET_FILTER {
            return Err(GtpError::InvalidFormat(format!(
                "{} packet filters, at most {} fit a TFT",
                count, MAX_NUM_OF_PACKET_FILTER
            )));
        }
        if let Some(param) = self.parameters.iter().find(|p| p.contents.len() > u8::MAX as usize) {
            return Err(GtpError::InvalidIeLength {
                expected: u8::MAX as usize,
                actual: param.contents.len(),
            });
        }

        let mut value = BytesMut::new();
        let e_bit = if self.parameters.is_empty() { 0 } else { 0x10 };
        value.put_u8(((self.operation_code as u8) << 5) | e_bit | count as u8);

        match self.operation_code {
            TftOperationCode::DeletePacketFiltersFromExistingTft => {
                for id in &self.packet_filter_identifiers {
                    value.put_u8(id & 0x0F);
                }
            }
            op if op.carries_packet_filters() => {
                for pf in &self.packet_filters {
                    pf.encode(&mut value)?;
                }
            }
            _ => {}
        }

        for param in &self.parameters {
            value.put_u8(param.identifier);
            value.put_u8(param.contents.len() as u8);
            value.put_slice(&param.contents);
        }

        buf.put_slice(&value);
        Ok(())
    }

    /// Wrap the encoded TFT in a Bearer TFT IE
    pub fn to_ie(&self, instance: u8) -> GtpResult<Gtp2Ie> {
        let mut buf = BytesMut::new();
        self.encode(&mut buf)?;
        Ok(Gtp2Ie::new(Gtp2IeType::BearerTft as u8, instance, buf.freeze()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_code_from_u8() {
        assert_eq!(TftOperationCode::from(1), TftOperationCode::CreateNewTft);
        assert_eq!(TftOperationCode::from(2), TftOperationCode::DeleteExistingTft);
        assert_eq!(TftOperationCode::from(0x0B), TftOperationCode::AddPacketFiltersToExistingTft);
        assert_eq!(TftOperationCode::from(0), TftOperationCode::Spare);
        assert!(!TftOperationCode::NoTftOperation.carries_packet_filters());
    }

    #[test]
    fn test_decode_create_new_tft() {
        // Create new TFT, 1 packet filter
        let value = Bytes::from_static(&[
            0x21, // op=1, E=0, count=1
            0x13, // direction=1, identifier=3
            0x0a, // precedence 10
            0x09, // length 9
            0x10, 10, 0, 0, 1, 255, 255, 255, 0,
        ]);

        let tft = BearerTft::decode(&value).unwrap();
        assert_eq!(tft.operation_code, TftOperationCode::CreateNewTft);
        assert_eq!(tft.packet_filters.len(), 1);

        let pf = &tft.packet_filters[0];
        assert_eq!(pf.direction, 1);
        assert_eq!(pf.identifier, 3);
        assert_eq!(pf.evaluation_precedence, 10);
        assert_eq!(pf.length, 9);
        assert_eq!(pf.components.len(), 1);

        let (addr, mask) = pf.components[0].ipv4_remote_address().unwrap();
        assert_eq!(addr, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(mask, Ipv4Addr::new(255, 255, 255, 0));
    }

    #[test]
    fn test_decode_multiple_components() {
        let value = Bytes::from_static(&[
            0x61, // op=3 (add), count=1
            0x21, 0x01, 0x0a,
            0x30, 17, // UDP
            0x41, 0x03, 0xe8, 0x07, 0xd0, // local ports 1000-2000
            0x50, 0x00, 0x50, // remote port 80
        ]);

        let tft = BearerTft::decode(&value).unwrap();
        let components = &tft.packet_filters[0].components;
        assert_eq!(components.len(), 3);
        assert_eq!(components[0].protocol_identifier_next_header().unwrap(), 17);
        assert_eq!(components[1].local_port_range().unwrap(), (1000, 2000));
        assert_eq!(components[2].single_remote_port().unwrap(), 80);
    }

    #[test]
    fn test_decode_truncated_component_fails_on_access() {
        let value = Bytes::from_static(&[
            0x21,
            0x11, 0x00, 0x02,
            0x40, 0x00, // single local port with one byte missing
        ]);

        let tft = BearerTft::decode(&value).unwrap();
        let component = &tft.packet_filters[0].components[0];
        assert_eq!(component.pf_type, pf_type::SINGLE_LOCAL_PORT);
        assert_eq!(
            component.single_local_port(),
            Err(GtpError::InvalidIeLength {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_decode_unknown_component_takes_rest() {
        let value = Bytes::from_static(&[
            0x21,
            0x11, 0x00, 0x06,
            0x30, 6,
            0xf0, 1, 2, 3,
        ]);

        let tft = BearerTft::decode(&value).unwrap();
        let components = &tft.packet_filters[0].components;
        assert_eq!(components.len(), 2);
        assert_eq!(components[1].pf_type, 0xf0);
        assert_eq!(components[1].contents.as_ref(), &[1, 2, 3]);
        assert_eq!(pf_type_name(0xf0), "Unknown");
    }

    #[test]
    fn test_decode_truncated_packet_filter() {
        let value = Bytes::from_static(&[0x22, 0x11, 0x00, 0x03, 0x30, 6, 0]);
        assert!(matches!(
            BearerTft::decode(&value),
            Err(GtpError::BufferTooShort { .. })
        ));
    }

    #[test]
    fn test_decode_empty_value() {
        assert_eq!(
            BearerTft::decode(&Bytes::new()),
            Err(GtpError::BufferTooShort {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_decode_delete_packet_filters() {
        let value = Bytes::from_static(&[0xa2, 0x01, 0x05]);
        let tft = BearerTft::decode(&value).unwrap();
        assert_eq!(
            tft.operation_code,
            TftOperationCode::DeletePacketFiltersFromExistingTft
        );
        assert_eq!(tft.packet_filter_identifiers, vec![1, 5]);
        assert!(tft.packet_filters.is_empty());
    }

    #[test]
    fn test_decode_parameters_list() {
        let value = Bytes::from_static(&[0x70, 0x01, 0x02, 0xaa, 0xbb]);
        let tft = BearerTft::decode(&value).unwrap();
        assert_eq!(tft.operation_code, TftOperationCode::AddPacketFiltersToExistingTft);
        assert_eq!(tft.parameters.len(), 1);
        assert_eq!(tft.parameters[0].identifier, 1);
        assert_eq!(tft.parameters[0].contents.as_ref(), &[0xaa, 0xbb]);
    }

    #[test]
    fn test_accessor_wrong_type() {
        let component = TftPfComponent::from_single_remote_port(443);
        assert!(matches!(
            component.single_local_port(),
            Err(GtpError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_ipv6_remote_address_accessor() {
        let addr: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let mask: Ipv6Addr = "ffff:ffff:ffff:ffff::".parse().unwrap();
        let component = TftPfComponent::from_ipv6_remote_address(addr, mask);
        assert_eq!(component.encoded_len(), 33);
        assert_eq!(component.ipv6_remote_address().unwrap(), (addr, mask));
    }

    #[test]
    fn test_encode_decode_through_ie() {
        let pf = TftPacketFilter::new(
            2,
            7,
            255,
            vec![
                TftPfComponent::from_security_parameter_index(0xdeadbeef),
                TftPfComponent::from_type_of_service_traffic_class(0xb8, 0xfc),
            ],
        )
        .unwrap();
        assert_eq!(pf.length, 8);

        let tft = BearerTft::with_packet_filters(
            TftOperationCode::ReplacePacketFiltersInExistingTft,
            vec![pf.clone()],
        );
        let ie = tft.to_ie(0).unwrap();
        assert_eq!(ie.ie_type, Gtp2IeType::BearerTft as u8);
        assert_eq!(ie.value[0], 0x81);

        let decoded = ie.bearer_tft().unwrap();
        assert_eq!(decoded, tft);
        assert_eq!(
            decoded.packet_filters[0].components[0].security_parameter_index().unwrap(),
            0xdeadbeef
        );
        assert_eq!(
            decoded.packet_filters[0].components[1].type_of_service_traffic_class().unwrap(),
            (0xb8, 0xfc)
        );
    }

    #[test]
    fn test_packet_filter_contents_too_long() {
        let addr: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let mask = Ipv6Addr::from(u128::MAX);
        let components = vec![TftPfComponent::from_ipv6_remote_address(addr, mask); 8];

        assert_eq!(
            TftPacketFilter::new(3, 1, 0, components.clone()),
            Err(GtpError::InvalidIeLength {
                expected: 255,
                actual: 264
            })
        );

        // Seven components still fit the length octet
        let pf = TftPacketFilter::new(3, 1, 0, components[..7].to_vec()).unwrap();
        assert_eq!(pf.length, 231);

        let oversized = TftPacketFilter {
            components,
            ..pf
        };
        let mut buf = BytesMut::new();
        assert!(matches!(
            oversized.encode(&mut buf),
            Err(GtpError::InvalidIeLength { actual: 264, .. })
        ));
    }

    #[test]
    fn test_encode_too_many_packet_filters() {
        let filters: Vec<_> = (0..16)
            .map(|id| {
                TftPacketFilter::new(3, id, id, vec![TftPfComponent::from_protocol_identifier(6)])
                    .unwrap()
            })
            .collect();

        let tft = BearerTft::with_packet_filters(TftOperationCode::CreateNewTft, filters.clone());
        let mut buf = BytesMut::new();
        assert!(matches!(tft.encode(&mut buf), Err(GtpError::InvalidFormat(_))));
        assert!(buf.is_empty());
        assert!(matches!(tft.to_ie(0), Err(GtpError::InvalidFormat(_))));

        let tft = BearerTft::with_packet_filters(
            TftOperationCode::CreateNewTft,
            filters[..MAX_NUM_OF_PACKET_FILTER].to_vec(),
        );
        let decoded = tft.to_ie(0).unwrap().bearer_tft().unwrap();
        assert_eq!(decoded.packet_filters.len(), MAX_NUM_OF_PACKET_FILTER);
    }

    #[test]
    fn test_encode_parameter_too_long() {
        let mut tft = BearerTft::new(TftOperationCode::NoTftOperation);
        tft.parameters.push(TftParameter {
            identifier: 1,
            contents: Bytes::from(vec![0u8; 256]),
        });
        assert!(matches!(
            tft.to_ie(0),
            Err(GtpError::InvalidIeLength {
                expected: 255,
                actual: 256
            })
        ));
    }
}
