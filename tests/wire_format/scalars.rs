//! Scalar Encoding Tests
//!
//! Null, booleans, strings, numbers, enums, date-times and time spans.

use crate::*;
use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};

// =============================================================================
// NULL / BOOL
// =============================================================================

#[test]
fn test_null_for_any_none() {
    assert_eq!(encode(&None::<String>), "null");
    assert_eq!(encode(&None::<Vec<i32>>), "null");
    assert_eq!(encode(&None::<Device>), "null");
}

#[test]
fn test_booleans() {
    assert_eq!(encode(&true), "true");
    assert_eq!(encode(&false), "false");
}

// =============================================================================
// STRINGS
// =============================================================================

#[test]
fn test_hello_world() {
    assert_eq!(encode("Hello World"), "\"Hello World\"");
}

#[test]
fn test_string_control_characters_stripped() {
    assert_eq!(encode("tab\tnew\nline\r\u{0007}"), "\"tabnewline\"");
}

#[test]
fn test_string_backslash_quote_escaped_once() {
    assert_eq!(encode("\\\""), "\"\\\\\\\"\"");
}

#[test]
fn test_char_is_string() {
    assert_eq!(encode(&'A'), "\"A\"");
}

// =============================================================================
// NUMBERS / ENUMS
// =============================================================================

#[test]
fn test_integer_widths() {
    assert_eq!(encode(&i8::MIN), "-128");
    assert_eq!(encode(&i16::MAX), "32767");
    assert_eq!(encode(&i64::MAX), "9223372036854775807");
    assert_eq!(encode(&u32::MAX), "4294967295");
}

#[test]
fn test_floats_default_rendering() {
    assert_eq!(encode(&0.1f64), "0.1");
    assert_eq!(encode(&-2.5f32), "-2.5");
    assert_eq!(encode(&100.0f64), "100");
}

#[test]
fn test_enum_ordinals() {
    assert_eq!(encode(&DeviceState::Offline), "0");
    assert_eq!(encode(&DeviceState::Idle), "1");
    assert_eq!(encode(&DeviceState::Busy), "2");
}

#[test]
fn test_scalars_independent_of_history() {
    let first = encode(&12.75f64);
    let _ = encode(&sample_device());
    let _ = serialize(&1u64);
    assert_eq!(encode(&12.75f64), first);
}

// =============================================================================
// DATE-TIMES / TIME SPANS
// =============================================================================

#[test]
fn test_datetime_utc_unquoted() {
    let dt = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 58).unwrap();
    assert_eq!(encode(&dt), "2021-12-31T23:59:58Z");
}

#[test]
fn test_datetime_offset() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let dt = offset.with_ymd_and_hms(2021, 6, 1, 8, 0, 0).unwrap();
    assert_eq!(encode(&dt), "2021-06-01T08:00:00+01:00");
}

#[test]
fn test_datetime_naive_fraction() {
    let dt = NaiveDate::from_ymd_opt(2021, 6, 1)
        .unwrap()
        .and_hms_micro_opt(8, 0, 0, 1_500)
        .unwrap();
    assert_eq!(encode(&dt), "2021-06-01T08:00:00.0015");
}

#[test]
fn test_time_span_hours_dropped() {
    let span = Duration::days(1) + Duration::hours(2) + Duration::minutes(30) + Duration::seconds(15);
    assert_eq!(encode(&span), "1:30:15");
}

#[test]
fn test_std_duration() {
    assert_eq!(encode(&std::time::Duration::from_secs(90)), "0:1:30");
}
