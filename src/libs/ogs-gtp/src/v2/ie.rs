//! GTPv2 Information Elements
//!
//! Generic TLIV framing for GTPv2-C IEs and the IE types that appear inside
//! a Bearer Context.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use crate::error::{GtpError, GtpResult};
use super::tft::BearerTft;

/// Type(1) + Length(2) + Spare/Instance(1)
pub const GTP2_IE_HDR_LEN: usize = 4;

/// GTPv2 IE Types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Gtp2IeType {
    Cause = 2,
    Ebi = 73,
    BearerQos = 80,
    BearerTft = 84,
    FTeid = 87,
    BearerContext = 93,
    ChargingId = 94,
    BearerFlags = 97,
    Pco = 78,
}

impl TryFrom<u8> for Gtp2IeType {
    type Error = GtpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Cause),
            73 => Ok(Self::Ebi),
            78 => Ok(Self::Pco),
            80 => Ok(Self::BearerQos),
            84 => Ok(Self::BearerTft),
            87 => Ok(Self::FTeid),
            93 => Ok(Self::BearerContext),
            94 => Ok(Self::ChargingId),
            97 => Ok(Self::BearerFlags),
            _ => Err(GtpError::InvalidIeType(value)),
        }
    }
}

/// Generic GTPv2 Information Element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gtp2Ie {
    /// IE Type
    pub ie_type: u8,
    /// IE Instance (4 bits)
    pub instance: u8,
    /// IE Value (raw bytes)
    pub value: Bytes,
}

impl Gtp2Ie {
    /// Create a new IE
    pub fn new(ie_type: u8, instance: u8, value: Bytes) -> Self {
        Self {
            ie_type,
            instance: instance & 0x0F,
            value,
        }
    }

    /// Create a new IE from slice
    pub fn from_slice(ie_type: u8, instance: u8, value: &[u8]) -> Self {
        Self::new(ie_type, instance, Bytes::copy_from_slice(value))
    }

    /// Encode IE to bytes
    pub fn encode(&self, buf: &mut BytesMut) -> GtpResult<()> {
        if self.value.len() > u16::MAX as usize {
            return Err(GtpError::InvalidIeLength {
                expected: u16::MAX as usize,
                actual: self.value.len(),
            });
        }

        buf.put_u8(self.ie_type);
        buf.put_u16(self.value.len() as u16);
        buf.put_u8(self.instance & 0x0F);
        buf.put_slice(&self.value);
        Ok(())
    }

    /// Decode IE from bytes
    pub fn decode(buf: &mut Bytes) -> GtpResult<Self> {
        if buf.remaining() < GTP2_IE_HDR_LEN {
            return Err(GtpError::BufferTooShort {
                needed: GTP2_IE_HDR_LEN,
                available: buf.remaining(),
            });
        }

        let ie_type = buf.get_u8();
        let length = buf.get_u16() as usize;
        let instance = buf.get_u8() & 0x0F;

        if buf.remaining() < length {
            return Err(GtpError::BufferTooShort {
                needed: length,
                available: buf.remaining(),
            });
        }

        let value = buf.copy_to_bytes(length);
        Ok(Self {
            ie_type,
            instance,
            value,
        })
    }

    /// Decode every IE in a buffer (message body or grouped IE value)
    pub fn decode_all(buf: &Bytes) -> GtpResult<Vec<Self>> {
        let mut buf = buf.clone();
        let mut ies = Vec::new();
        while buf.has_remaining() {
            ies.push(Self::decode(&mut buf)?);
        }
        Ok(ies)
    }

    /// Decode the members of a grouped IE such as Bearer Context
    pub fn grouped(&self) -> GtpResult<Vec<Self>> {
        if self.ie_type != Gtp2IeType::BearerContext as u8 {
            return Err(GtpError::InvalidIeType(self.ie_type));
        }
        Self::decode_all(&self.value)
    }

    /// Extract the Bearer TFT carried by this IE
    pub fn bearer_tft(&self) -> GtpResult<BearerTft> {
        if self.ie_type != Gtp2IeType::BearerTft as u8 {
            return Err(GtpError::InvalidIeType(self.ie_type));
        }
        BearerTft::decode(&self.value)
    }

    /// Get encoded length
    pub fn encoded_len(&self) -> usize {
        GTP2_IE_HDR_LEN + self.value.len()
    }
}

/// Find the first IE with the given type and instance
pub fn find_ie(ies: &[Gtp2Ie], ie_type: Gtp2IeType, instance: u8) -> Option<&Gtp2Ie> {
    ies.iter()
        .find(|ie| ie.ie_type == ie_type as u8 && ie.instance == instance)
}
