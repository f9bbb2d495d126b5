//! NextGCore GTP Protocol Library
//!
//! This crate provides GTPv2-C Information Element framing and decoding of the
//! Bearer TFT IE, as specified in 3GPP TS 29.274 and 3GPP TS 24.008.

pub mod error;
pub mod v2;


pub use error::{GtpError, GtpResult};
