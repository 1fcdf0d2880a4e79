//! JSON-lite wire encoding
//!
//! This module turns any [`Encode`](jsonlite_core::Encode) value into the
//! JSON-shaped text consumed by the HTTP API and the diagnostic log. The text
//! deliberately diverges from RFC-8259 JSON:
//!
//! - enumerations are written as their ordinal
//! - control characters are stripped rather than escaped
//! - date-times and time spans are bare, unquoted tokens
//! - time spans use `days:minutes:seconds`, without hours
//! - containers are always multi-line with CRLF line breaks, even when empty

mod encode;
mod error;
mod escape;
mod format;
mod options;

pub use encode::{serialize, serialize_with, JsonLiteWriter, INDENT_STEP, LINE_BREAK};
pub use error::EncodeError;
pub use escape::{escape, STRIPPED};
pub use format::{format_time_span, format_timestamp};
pub use options::{WriterOptions, DEFAULT_MAX_DEPTH};
