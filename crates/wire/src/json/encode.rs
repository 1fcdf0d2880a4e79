//! JSON-lite encoding
//!
//! Implements the recursive writer. Output rules per category:
//! - scalars are written inline (`null`, `true`, ordinals, numbers)
//! - strings are quoted after [`escape`](super::escape)
//! - date-times and time spans are bare tokens
//! - containers and records always span several lines, indented by three
//!   spaces per level, with CRLF line breaks

use super::error::EncodeError;
use super::escape::escape;
use super::format::{format_time_span, format_timestamp};
use super::options::WriterOptions;
use jsonlite_core::{Encode, Field, Value};

/// Spaces added per nesting level
pub const INDENT_STEP: usize = 3;

/// Line break between container lines
pub const LINE_BREAK: &str = "\r\n";

/// Recursive writer that exclusively owns its output buffer
#[derive(Debug, Default)]
pub struct JsonLiteWriter {
    out: String,
    options: WriterOptions,
    // Indentation of the value passed to the current `write` call
    base_indent: usize,
}

impl JsonLiteWriter {
    /// Create a writer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with the given options
    pub fn with_options(options: WriterOptions) -> Self {
        JsonLiteWriter {
            out: String::new(),
            options,
            base_indent: 0,
        }
    }

    /// Append `value`, written as if it started on a line indented by `indent`
    ///
    /// Children of containers are written at `indent + INDENT_STEP`; the
    /// closing bracket returns to `indent`. The value sits at depth 0 of the
    /// depth guard whatever its indentation. On error the buffer is left as it
    /// was before the call.
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T, indent: usize) -> Result<(), EncodeError> {
        let start = self.out.len();
        self.base_indent = indent;
        let result = self.write_value(value.to_value(), indent);
        if result.is_err() {
            self.out.truncate(start);
        }
        result
    }

    /// Consume the writer, returning the text written so far
    pub fn into_string(self) -> String {
        self.out
    }

    fn write_value(&mut self, value: Value<'_>, indent: usize) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if b { "true" } else { "false" }),
            Value::DateTime(ts) => self.out.push_str(&format_timestamp(&ts)),
            Value::Enum(ordinal) => self.out.push_str(&ordinal.to_string()),
            Value::String(s) => self.write_str(&s),
            Value::Number(n) => self.out.push_str(&n.to_string()),
            Value::TimeSpan(span) => self.out.push_str(&format_time_span(&span)),
            Value::Map(entries) => self.write_map(&entries, indent)?,
            Value::Sequence(items) => self.write_sequence(&items, indent)?,
            Value::Object(fields) => self.write_object(&fields, indent)?,
            Value::Unsupported { type_name } => {
                return Err(EncodeError::UnsupportedType { type_name })
            }
        }
        Ok(())
    }

    fn write_str(&mut self, s: &str) {
        self.out.push('"');
        self.out.push_str(&escape(s));
        self.out.push('"');
    }

    fn write_map(
        &mut self,
        entries: &[(&dyn Encode, &dyn Encode)],
        indent: usize,
    ) -> Result<(), EncodeError> {
        let child = self.enter(indent)?;
        self.out.push('{');
        self.new_line(child);
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                self.new_line(child);
            }
            let key = key.to_value();
            let category = key.category();
            if !category.is_valid_key() {
                return Err(EncodeError::InvalidKey { category });
            }
            self.write_value(key, child)?;
            self.out.push_str(": ");
            self.write_value(value.to_value(), child)?;
        }
        self.new_line(indent);
        self.out.push('}');
        Ok(())
    }

    fn write_sequence(&mut self, items: &[&dyn Encode], indent: usize) -> Result<(), EncodeError> {
        let child = self.enter(indent)?;
        self.out.push('[');
        self.new_line(child);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                self.new_line(child);
            }
            self.write_value(item.to_value(), child)?;
        }
        self.new_line(indent);
        self.out.push(']');
        Ok(())
    }

    fn write_object(&mut self, fields: &[Field<'_>], indent: usize) -> Result<(), EncodeError> {
        let child = self.enter(indent)?;
        self.out.push('{');
        self.new_line(child);
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                self.new_line(child);
            }
            self.write_str(&lower_first(field.name));
            self.out.push_str(": ");
            self.write_value(field.value.to_value(), child)?;
        }
        self.new_line(indent);
        self.out.push('}');
        Ok(())
    }

    /// Check the depth guard and return the children's indentation
    fn enter(&self, indent: usize) -> Result<usize, EncodeError> {
        let limit = self.options.max_depth;
        let depth = indent.saturating_sub(self.base_indent) / INDENT_STEP;
        if depth >= limit {
            return Err(EncodeError::DepthLimitExceeded { limit });
        }
        Ok(indent + INDENT_STEP)
    }

    fn new_line(&mut self, indent: usize) {
        self.out.push_str(LINE_BREAK);
        self.out.extend(std::iter::repeat(' ').take(indent));
    }
}

/// Lower-case the first character of a field name
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Encode a value to JSON-lite text with default options
pub fn serialize<T: Encode + ?Sized>(value: &T) -> Result<String, EncodeError> {
    serialize_with(value, &WriterOptions::default())
}

/// Encode a value to JSON-lite text
pub fn serialize_with<T: Encode + ?Sized>(
    value: &T,
    options: &WriterOptions,
) -> Result<String, EncodeError> {
    let mut writer = JsonLiteWriter::with_options(*options);
    writer.write(value, 0)?;
    Ok(writer.into_string())
}
