//! Error types for the action group adapter.
//!
//! Only failures that reject the whole invocation live here. Backend call
//! failures are represented as data (see `BackendResult`) and never cross
//! the handler boundary as errors.

use std::fmt;

#[derive(Debug)]
pub enum AdapterError {
    /// A structured booking field held neither valid JSON nor valid XML.
    PayloadDecode(String),
    /// A numeric field did not coerce to an integer.
    InvalidParameter(String),
}

impl AdapterError {
    /// Stable category name surfaced in the Lambda diagnostic.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PayloadDecode(_) => "PayloadDecodeError",
            Self::InvalidParameter(_) => "InvalidParameter",
        }
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayloadDecode(msg) => write!(f, "Payload decode error: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for AdapterError {}

impl From<AdapterError> for lambda_runtime::Diagnostic {
    fn from(error: AdapterError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}
