//! # jsonlite
//!
//! A small encoder that turns in-memory values into JSON-shaped text for an
//! embedded HTTP API and for structured debug logs.
//!
//! ## Quick Start
//!
//! ```
//! use jsonlite::prelude::*;
//!
//! struct Item {
//!     id: i32,
//!     name: String,
//! }
//!
//! impl Encode for Item {
//!     fn to_value(&self) -> Value<'_> {
//!         Value::Object(vec![Field::new("Id", &self.id), Field::new("Name", &self.name)])
//!     }
//! }
//!
//! let text = serialize(&Item { id: 1, name: "Test".into() })?;
//! assert_eq!(text, "{\r\n   \"id\": 1,\r\n   \"name\": \"Test\"\r\n}");
//! # Ok::<(), jsonlite::Error>(())
//! ```
//!
//! ## Not JSON
//!
//! The output is JSON-shaped but intentionally non-conformant: enumerations
//! are ordinals, control characters are stripped, date-times and time spans
//! are bare tokens, and containers always span several CRLF-separated lines.
//! There is no decoder.
//!
//! ## Modules
//!
//! - [`logging`] - `tracing` integration for diagnostic values
//! - [`response`] - encoded HTTP response bodies
//! - [`config`] - loading [`WriterOptions`] from host configuration

#![warn(missing_docs)]

mod error;

pub mod config;
pub mod logging;
pub mod prelude;
pub mod response;

pub use error::{Error, Result};

// Re-export the value model
pub use jsonlite_core::{
    classify, encode_enum, encode_record, Category, Encode, Field, Number, Timestamp, UtcOffset,
    Value,
};

// Re-export the encoder
pub use jsonlite_wire::{
    escape, serialize, serialize_with, EncodeError, JsonLiteWriter, WriterOptions,
    DEFAULT_MAX_DEPTH, INDENT_STEP, LINE_BREAK, STRIPPED,
};
