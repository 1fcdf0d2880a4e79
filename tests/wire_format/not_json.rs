//! Non-Conformance Tests
//!
//! The format has no decoder and is not meant to be read by standard JSON
//! parsers. These tests pin down where it diverges.

use crate::*;
use chrono::Duration;

fn parses_as_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

#[test]
fn test_time_span_is_not_json() {
    let text = encode(&Duration::days(2));
    assert_eq!(text, "2:0:0");
    assert!(!parses_as_json(&text));
}

#[test]
fn test_datetime_is_not_json() {
    let dt = chrono::NaiveDate::from_ymd_opt(2020, 2, 2)
        .unwrap()
        .and_hms_opt(2, 2, 2)
        .unwrap();
    assert!(!parses_as_json(&encode(&dt)));
}

#[test]
fn test_map_with_numeric_keys_is_not_json() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(1i32, DeviceState::Busy);
    let text = encode(&map);
    assert_eq!(text, "{\r\n   1: 2\r\n}");
    assert!(!parses_as_json(&text));
}

#[test]
fn test_enum_loses_its_name() {
    let text = encode(&DeviceState::Busy);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::json!(2));
}

#[test]
fn test_control_characters_lost_not_escaped() {
    let text = encode("a\nb");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_ne!(parsed, serde_json::json!("a\nb"));
    assert_eq!(parsed, serde_json::json!("ab"));
}
