//! JSON response bodies for the embedded HTTP API.
//!
//! The transport is not part of this crate; handlers build a [`JsonBody`] and
//! hand its content type and bytes to whatever server they run in.

use crate::error::Result;
use jsonlite_core::Encode;
use jsonlite_wire::{serialize_with, WriterOptions};

/// Content type sent with every encoded body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An encoded response body
///
/// Only constructed from encoder output, so the bytes are always UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody {
    content_type: &'static str,
    text: String,
}

impl JsonBody {
    /// Encode a value with default writer options
    pub fn from_value<T: Encode + ?Sized>(value: &T) -> Result<Self> {
        Self::from_value_with(value, &WriterOptions::default())
    }

    /// Encode a value with the given writer options
    pub fn from_value_with<T: Encode + ?Sized>(value: &T, options: &WriterOptions) -> Result<Self> {
        let text = serialize_with(value, options)?;
        Ok(JsonBody {
            content_type: JSON_CONTENT_TYPE,
            text,
        })
    }

    /// Value for the `Content-Type` header
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Body length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the body is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// View the body as text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// View the body as UTF-8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Consume the body, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }
}
