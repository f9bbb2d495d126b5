//! TFT translation error types

use ogs_gtp::v2::{pf_type_name, TftOperationCode};
use ogs_gtp::GtpError;
use thiserror::Error;

/// TFT translation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TftError {
    /// The IE did not yield a Bearer TFT
    #[error("Couldn't get Bearer TFT: {0}")]
    Extraction(GtpError),

    /// Operation code with no translation
    #[error("TFT operation {0:?} is not implemented")]
    UnsupportedOperation(TftOperationCode),

    /// A packet filter component payload is malformed
    #[error("{} ({kind:#04x}): {cause}", pf_type_name(*.kind))]
    ComponentDecode { kind: u8, cause: GtpError },
}

/// TFT translation result type
pub type TftResult<T> = Result<T, TftError>;
