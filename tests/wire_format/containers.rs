//! Container Encoding Tests
//!
//! Sequences and associative containers, including the empty-body quirk and
//! nested indentation.

use crate::*;
use indexmap::IndexMap;
use std::collections::{BTreeMap, VecDeque};

// =============================================================================
// SEQUENCES
// =============================================================================

#[test]
fn test_empty_string_sequence() {
    let empty: Vec<String> = vec![];
    assert_eq!(encode(&empty), "[\r\n   \r\n]");
}

#[test]
fn test_sequence_of_strings() {
    let names = ["a", "b", "c"];
    assert_eq!(
        encode(&names),
        lines(&["[", "   \"a\",", "   \"b\",", "   \"c\"", "]"])
    );
}

#[test]
fn test_sequence_types_share_layout() {
    let vec = vec![1, 2];
    let deque: VecDeque<i32> = vec.iter().copied().collect();
    let slice: &[i32] = &vec;
    assert_eq!(encode(&vec), encode(&deque));
    assert_eq!(encode(&vec), encode(slice));
}

#[test]
fn test_nested_empty_sequence_indented() {
    let nested: Vec<Vec<i32>> = vec![vec![]];
    assert_eq!(
        encode(&nested),
        lines(&["[", "   [", "      ", "   ]", "]"])
    );
}

#[test]
fn test_mixed_sequence() {
    let items: Vec<Box<dyn Encode>> = vec![
        Box::new(1i32),
        Box::new("two"),
        Box::new(None::<i32>),
        Box::new(DeviceState::Idle),
    ];
    assert_eq!(
        encode(&items),
        lines(&["[", "   1,", "   \"two\",", "   null,", "   1", "]"])
    );
}

// =============================================================================
// ASSOCIATIVE CONTAINERS
// =============================================================================

#[test]
fn test_map_insertion_order_preserved() {
    let mut map = IndexMap::new();
    map.insert("zeta", 1);
    map.insert("alpha", 2);
    assert_eq!(
        encode(&map),
        lines(&["{", "   \"zeta\": 1,", "   \"alpha\": 2", "}"])
    );
}

#[test]
fn test_map_with_boolean_and_numeric_keys() {
    let mut flags = BTreeMap::new();
    flags.insert(false, "off");
    flags.insert(true, "on");
    assert_eq!(
        encode(&flags),
        lines(&["{", "   false: \"off\",", "   true: \"on\"", "}"])
    );
}

#[test]
fn test_map_with_time_span_key() {
    let mut schedule = IndexMap::new();
    schedule.insert(chrono::Duration::minutes(5), "poll");
    assert_eq!(encode(&schedule), lines(&["{", "   0:5:0: \"poll\"", "}"]));
}

#[test]
fn test_map_of_sequences() {
    let mut groups = IndexMap::new();
    groups.insert("doors", vec![1, 2]);
    groups.insert("empty", vec![]);
    assert_eq!(
        encode(&groups),
        lines(&[
            "{",
            "   \"doors\": [",
            "      1,",
            "      2",
            "   ],",
            "   \"empty\": [",
            "      ",
            "   ]",
            "}",
        ])
    );
}

#[test]
fn test_empty_map_quirk() {
    let map: BTreeMap<String, i32> = BTreeMap::new();
    assert_eq!(encode(&map), "{\r\n   \r\n}");
}

#[test]
fn test_json_value_interop() {
    let value = serde_json::json!({"id": 7, "ok": true, "list": [null]});
    let text = encode(&value);
    assert!(text.starts_with("{\r\n   "));
    assert!(text.contains("\"id\": 7"));
    assert!(text.contains("\"ok\": true"));
    assert!(text.contains("\"list\": [\r\n      null\r\n   ]"));
}
