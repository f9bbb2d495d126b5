//! Address to integer conversion

use std::net::{Ipv4Addr, Ipv6Addr};

/// IPv4 address as a big-endian 32-bit value
pub fn ipv4_to_u32(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// IPv6 address narrowed to its low-order 32 bits.
///
/// The output model only has room for 32 bits, so everything above the last
/// four octets is discarded.
pub fn ipv6_to_u32(addr: Ipv6Addr) -> u32 {
    u128::from(addr) as u32
}
