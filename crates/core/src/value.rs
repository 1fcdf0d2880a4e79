//! Value view and classification for jsonlite
//!
//! This module defines the [`Value`] view every encodable type produces and the
//! closed [`Category`] tag set the writer dispatches on.
//!
//! ## Shallow Views
//!
//! A `Value` is computed once per visited value and only describes one level of
//! the graph. Containers and records hold borrowed `&dyn Encode` children which
//! are classified when the writer reaches them, so no intermediate tree is built.
//!
//! ## The Eleven Categories
//!
//! | Category | Produced by |
//! |----------|-------------|
//! | Null | `None`, JSON null |
//! | Boolean | `bool` |
//! | DateTime | chrono date-times |
//! | Enum | `encode_enum!` types |
//! | String | `str`, `String`, `char` |
//! | Numeric | i8..i64, u8..u32, f32, f64 |
//! | TimeSpan | chrono and std durations |
//! | AssociativeContainer | maps |
//! | Sequence | vectors, slices, arrays |
//! | Object | `encode_record!` types |
//! | Unsupported | everything else |

use crate::encode::Encode;
use crate::types::{Number, Timestamp};
use chrono::Duration;
use std::borrow::Cow;
use std::fmt;

/// Shallow view of one encodable value
///
/// The variant order mirrors the classification order: a type that could fit
/// several variants (an enum stored as an integer, a string that is also a
/// sequence of characters) is always mapped to the earliest one by its
/// [`Encode`] implementation.
pub enum Value<'a> {
    /// Absence of a value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// Calendar date and wall-clock time with its offset kind
    DateTime(Timestamp),

    /// Ordinal of an enumerated value
    Enum(i64),

    /// Text, including single characters
    String(Cow<'a, str>),

    /// One of the fixed numeric primitives
    Number(Number),

    /// Signed time span
    TimeSpan(Duration),

    /// Key/value pairs in the container's natural iteration order
    Map(Vec<(&'a dyn Encode, &'a dyn Encode)>),

    /// Ordered elements
    Sequence(Vec<&'a dyn Encode>),

    /// Named fields in declaration order
    Object(Vec<Field<'a>>),

    /// A value the encoder cannot represent
    Unsupported {
        /// Name of the offending type
        type_name: &'static str,
    },
}

impl<'a> Value<'a> {
    /// Build an `Unsupported` view naming `T`
    pub fn unsupported<T: ?Sized>() -> Self {
        Value::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Map this view to its category
    pub fn category(&self) -> Category {
        match self {
            Value::Null => Category::Null,
            Value::Bool(_) => Category::Boolean,
            Value::DateTime(_) => Category::DateTime,
            Value::Enum(_) => Category::Enum,
            Value::String(_) => Category::String,
            Value::Number(_) => Category::Numeric,
            Value::TimeSpan(_) => Category::TimeSpan,
            Value::Map(_) => Category::AssociativeContainer,
            Value::Sequence(_) => Category::Sequence,
            Value::Object(_) => Category::Object,
            Value::Unsupported { .. } => Category::Unsupported,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::DateTime(ts) => f.debug_tuple("DateTime").field(ts).finish(),
            Value::Enum(ordinal) => f.debug_tuple("Enum").field(ordinal).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::TimeSpan(d) => f.debug_tuple("TimeSpan").field(d).finish(),
            Value::Map(entries) => write!(f, "Map(<{} entries>)", entries.len()),
            Value::Sequence(items) => write!(f, "Sequence(<{} items>)", items.len()),
            Value::Object(fields) => f
                .debug_tuple("Object")
                .field(&fields.iter().map(|field| field.name).collect::<Vec<_>>())
                .finish(),
            Value::Unsupported { type_name } => f
                .debug_struct("Unsupported")
                .field("type_name", type_name)
                .finish(),
        }
    }
}

/// One named field of an Object-category value
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// Field name as declared; the writer lower-cases its first letter
    pub name: &'a str,
    /// Field value
    pub value: &'a dyn Encode,
}

impl<'a> Field<'a> {
    /// Create a field descriptor
    pub fn new(name: &'a str, value: &'a dyn Encode) -> Self {
        Field { name, value }
    }
}

/// Semantic value category
///
/// Closed tag set used to select a formatting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Bare timestamp token
    DateTime,
    /// Numeric ordinal
    Enum,
    /// Quoted, escaped text
    String,
    /// Decimal number
    Numeric,
    /// `days:minutes:seconds`
    TimeSpan,
    /// `{ key: value, ... }`
    AssociativeContainer,
    /// `[ item, ... ]`
    Sequence,
    /// `{ "field": value, ... }`
    Object,
    /// Fails the encoding call
    Unsupported,
}

impl Category {
    /// All categories in classification order
    pub const ALL: [Category; 11] = [
        Category::Null,
        Category::Boolean,
        Category::DateTime,
        Category::Enum,
        Category::String,
        Category::Numeric,
        Category::TimeSpan,
        Category::AssociativeContainer,
        Category::Sequence,
        Category::Object,
        Category::Unsupported,
    ];

    /// Check if values of this category may serve as map keys
    ///
    /// Only DateTime, TimeSpan, String, Numeric and Boolean keys are accepted.
    /// Null and Enum keys are rejected along with every container.
    pub fn is_valid_key(&self) -> bool {
        matches!(
            self,
            Category::DateTime
                | Category::TimeSpan
                | Category::String
                | Category::Numeric
                | Category::Boolean
        )
    }

    /// Check if this category nests other values
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Category::AssociativeContainer | Category::Sequence | Category::Object
        )
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Null => "Null",
            Category::Boolean => "Boolean",
            Category::DateTime => "DateTime",
            Category::Enum => "Enum",
            Category::String => "String",
            Category::Numeric => "Numeric",
            Category::TimeSpan => "TimeSpan",
            Category::AssociativeContainer => "AssociativeContainer",
            Category::Sequence => "Sequence",
            Category::Object => "Object",
            Category::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify any encodable value
pub fn classify<T: Encode + ?Sized>(value: &T) -> Category {
    value.to_value().category()
}
