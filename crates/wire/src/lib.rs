//! Wire encoding for jsonlite
//!
//! This crate implements the JSON-lite text format:
//!
//! | Category | Encoding |
//! |----------|----------|
//! | Null | `null` |
//! | Boolean | `true`/`false` |
//! | DateTime | `2024-01-02T03:04:05.25Z` (bare) |
//! | Enum | ordinal |
//! | String | `"..."`, control characters stripped |
//! | Numeric | decimal |
//! | TimeSpan | `1:30:15` (bare, no hours) |
//! | AssociativeContainer | `{ key: value, ... }` |
//! | Sequence | `[ ... ]` |
//! | Object | `{ "field": value, ... }` |
//!
//! Containers span several lines, indented three spaces per level, with CRLF
//! line breaks.
//!
//! ## Examples
//!
//! ```
//! use jsonlite_wire::serialize;
//!
//! assert_eq!(serialize("Hello World").unwrap(), "\"Hello World\"");
//! assert_eq!(serialize(&vec![1, 2]).unwrap(), "[\r\n   1,\r\n   2\r\n]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    escape, serialize, serialize_with, EncodeError, JsonLiteWriter, WriterOptions,
    DEFAULT_MAX_DEPTH, INDENT_STEP, LINE_BREAK, STRIPPED,
};
