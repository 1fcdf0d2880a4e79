//! Wire Format Test Suite
//!
//! End-to-end checks of the JSON-lite text produced through the facade.
//!
//! ## Key Verification Points
//!
//! 1. Scalars render deterministically per category
//! 2. Containers and records keep the three-space, CRLF layout
//! 3. Map keys and unsupported values fail the whole call
//! 4. The output is not standard JSON
//! 5. Log lines carry the encoded text
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test wire_format
//! cargo test --test wire_format containers::
//! ```

use jsonlite::prelude::*;
use jsonlite::{EncodeError, DEFAULT_MAX_DEPTH};

// Test modules
pub mod containers;
pub mod not_json;
pub mod scalars;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Join lines with the format's line break
pub fn lines(parts: &[&str]) -> String {
    parts.join("\r\n")
}

/// Encode a value, panicking with the error on failure
pub fn encode<T: Encode + ?Sized>(value: &T) -> String {
    match serialize(value) {
        Ok(text) => text,
        Err(e) => panic!("encoding failed: {}", e),
    }
}

#[derive(Clone, Copy)]
pub enum DeviceState {
    Offline,
    Idle,
    Busy,
}

encode_enum!(DeviceState);

pub struct Device {
    pub id: i32,
    pub name: String,
    pub state: DeviceState,
    pub tags: Vec<String>,
}

encode_record!(Device {
    id,
    name,
    state,
    tags,
});

/// A device with every field populated
pub fn sample_device() -> Device {
    Device {
        id: 3,
        name: "gate \"north\"".to_string(),
        state: DeviceState::Busy,
        tags: vec!["rfid".to_string(), "camera".to_string()],
    }
}
