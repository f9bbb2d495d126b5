//! GTP Error types

use thiserror::Error;

/// GTP Error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GtpError {
    /// Buffer too short for operation
    #[error("Buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort { needed: usize, available: usize },

    /// Invalid message format
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    /// Invalid IE type
    #[error("Invalid IE type: {0}")]
    InvalidIeType(u8),

    /// Invalid IE length
    #[error("Invalid IE length: expected {expected}, got {actual}")]
    InvalidIeLength { expected: usize, actual: usize },
}

/// GTP Result type
pub type GtpResult<T> = Result<T, GtpError>;
