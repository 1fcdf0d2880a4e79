//! Value model for jsonlite
//!
//! This crate defines what the encoder can see of a value:
//!
//! - [`Encode`]: the capability every encodable type implements
//! - [`Value`]: the shallow view `Encode` produces, one level at a time
//! - [`Category`]: the closed classification tag the writer dispatches on
//! - [`Field`]: a named field of an Object-category value
//!
//! Records and enumerations opt in through [`encode_record!`] and
//! [`encode_enum!`]; standard scalars, chrono date-times and durations,
//! sequences, maps and `serde_json::Value` are covered out of the box.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod macros;

pub mod encode;
pub mod types;
pub mod value;

pub use encode::Encode;
pub use types::{Number, Timestamp, UtcOffset};
pub use value::{classify, Category, Field, Value};
