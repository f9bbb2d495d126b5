//! Packet filter component translation

use ogs_gtp::v2::{pf_type, TftPfComponent};
use ogs_gtp::GtpError;

use crate::convert::{ipv4_to_u32, ipv6_to_u32};
use crate::error::{TftError, TftResult};
use crate::model::{IpRemoteAddress, PacketFilterContents, PortRange, TypeOfServiceTrafficClass};

/// Translate one component into its output contents.
///
/// `flags` carries the component type whatever the type is. Types without an
/// output field produce contents holding only `flags`. Fails when the typed
/// payload cannot be decoded.
pub fn translate_component(component: &TftPfComponent) -> TftResult<PacketFilterContents> {
    let mut content = PacketFilterContents::tagged(component.pf_type as u32);
    let decode_error = |cause: GtpError| TftError::ComponentDecode {
        kind: component.pf_type,
        cause,
    };

    match component.pf_type {
        pf_type::IPV4_REMOTE_ADDRESS => {
            let (addr, mask) = component.ipv4_remote_address().map_err(decode_error)?;
            content.ipv4_remote_addresses.push(IpRemoteAddress {
                addr: ipv4_to_u32(addr),
                mask: ipv4_to_u32(mask),
            });
        }
        pf_type::IPV6_REMOTE_ADDRESS => {
            let (addr, mask) = component.ipv6_remote_address().map_err(decode_error)?;
            content.ipv6_remote_addresses.push(IpRemoteAddress {
                addr: ipv6_to_u32(addr),
                mask: ipv6_to_u32(mask),
            });
        }
        pf_type::PROTOCOL_IDENTIFIER_NEXT_HEADER => {
            let protocol = component
                .protocol_identifier_next_header()
                .map_err(decode_error)?;
            content.protocol_identifier_nextheader = protocol as u32;
        }
        pf_type::SINGLE_LOCAL_PORT => {
            let port = component.single_local_port().map_err(decode_error)?;
            content.single_local_port = port as u32;
        }
        pf_type::SINGLE_REMOTE_PORT => {
            let port = component.single_remote_port().map_err(decode_error)?;
            content.single_remote_port = port as u32;
        }
        pf_type::LOCAL_PORT_RANGE => {
            let (low, high) = component.local_port_range().map_err(decode_error)?;
            content.local_port_range = Some(PortRange {
                low_limit: low as u32,
                high_limit: high as u32,
            });
        }
        pf_type::REMOTE_PORT_RANGE => {
            let (low, high) = component.remote_port_range().map_err(decode_error)?;
            content.remote_port_range = Some(PortRange {
                low_limit: low as u32,
                high_limit: high as u32,
            });
        }
        pf_type::SECURITY_PARAMETER_INDEX => {
            content.security_parameter_index =
                component.security_parameter_index().map_err(decode_error)?;
        }
        pf_type::TYPE_OF_SERVICE_TRAFFIC_CLASS => {
            let (value, mask) = component
                .type_of_service_traffic_class()
                .map_err(decode_error)?;
            content.type_of_service_traffic_class = Some(TypeOfServiceTrafficClass {
                value: value as u32,
                mask: mask as u32,
            });
        }
        _ => {}
    }

    Ok(content)
}
