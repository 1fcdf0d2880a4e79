//! Structured debug logging of arbitrary values.
//!
//! The encoder never logs by itself. This module is the caller that turns
//! values into log lines through `tracing`:
//!
//! ```
//! use jsonlite::logging::encoded;
//!
//! let readings = vec![12i32, 15, 9];
//! tracing::debug!(readings = %encoded(&readings), "sensor batch");
//! ```

use jsonlite_core::Encode;
use jsonlite_wire::{serialize_with, WriterOptions};
use std::fmt;
use tracing::{debug, warn};

/// `Display` adapter that renders a value as JSON-lite text
///
/// Values that fail to encode render as `<unencodable: {error}>` instead of
/// failing the surrounding log statement.
pub struct Encoded<'a, T: ?Sized> {
    value: &'a T,
    options: WriterOptions,
}

/// Wrap a value for logging with the shallow preset
pub fn encoded<T: Encode + ?Sized>(value: &T) -> Encoded<'_, T> {
    Encoded {
        value,
        options: WriterOptions::shallow(),
    }
}

impl<'a, T: ?Sized> Encoded<'a, T> {
    /// Use different writer options
    pub fn with_options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }
}

impl<T: Encode + ?Sized> fmt::Display for Encoded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serialize_with(self.value, &self.options) {
            Ok(text) => f.write_str(&text),
            Err(e) => write!(f, "<unencodable: {}>", e),
        }
    }
}

/// Emit a debug event carrying the encoded value
///
/// Encoding failures are reported as a warning with the error attached.
pub fn log_value<T: Encode + ?Sized>(label: &str, value: &T) {
    match serialize_with(value, &WriterOptions::shallow()) {
        Ok(text) => debug!(label, value = %text, "encoded value"),
        Err(e) => warn!(label, error = %e, "value could not be encoded"),
    }
}
