//! Encoding errors
//!
//! Every error aborts the whole call; no partial output is returned.

use jsonlite_core::Category;
use thiserror::Error;

/// Encode error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A value classified as Unsupported
    #[error("unsupported type: {type_name}")]
    UnsupportedType {
        /// Name of the offending type
        type_name: &'static str,
    },

    /// A map key outside DateTime, TimeSpan, String, Numeric and Boolean
    #[error("invalid map key: {category} values cannot be keys")]
    InvalidKey {
        /// Category of the rejected key
        category: Category,
    },

    /// Nesting went deeper than the configured depth guard
    #[error("depth limit exceeded: more than {limit} nested levels")]
    DepthLimitExceeded {
        /// The configured maximum depth
        limit: usize,
    },
}
