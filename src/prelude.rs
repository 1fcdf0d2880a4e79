//! Convenient imports for jsonlite.
//!
//! This module re-exports the most commonly used items so you can get started
//! with a single import:
//!
//! ```
//! use jsonlite::prelude::*;
//!
//! struct Door {
//!     id: i32,
//!     open: bool,
//! }
//!
//! encode_record!(Door { id, open });
//!
//! let text = serialize(&Door { id: 4, open: false })?;
//! assert!(text.starts_with('{'));
//! # Ok::<(), jsonlite::Error>(())
//! ```

// Entry points
pub use crate::{serialize, serialize_with};

// Error handling
pub use crate::error::{Error, Result};

// Value model
pub use crate::{encode_enum, encode_record, Category, Encode, Field, Value};

// Options and consumers
pub use crate::logging::{encoded, log_value};
pub use crate::response::JsonBody;
pub use crate::WriterOptions;
