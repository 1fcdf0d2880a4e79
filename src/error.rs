//! Unified error types for jsonlite.
//!
//! This module wraps the wire encoder's errors and configuration failures in a
//! single type for callers of the facade.

use jsonlite_wire::EncodeError;
use thiserror::Error;

/// All jsonlite errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding failed (unsupported value, invalid key, depth limit)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Writer options could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for jsonlite operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a value of an unsupported type was encountered.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Encode(EncodeError::UnsupportedType { .. }))
    }

    /// Check if a map key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::Encode(EncodeError::InvalidKey { .. }))
    }

    /// Check if the depth guard tripped.
    pub fn is_depth_limit(&self) -> bool {
        matches!(self, Error::Encode(EncodeError::DepthLimitExceeded { .. }))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
