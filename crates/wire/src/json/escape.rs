//! String sanitizing for embedded text
//!
//! Control characters are dropped, not escaped, and only backslash and double
//! quote receive a backslash prefix. The result is therefore not RFC-8259
//! escaping and must not be applied twice.

/// Characters removed outright: BEL, BS, TAB, LF, VT, FF, CR
pub const STRIPPED: [char; 7] = [
    '\u{0007}', '\u{0008}', '\t', '\n', '\u{000B}', '\u{000C}', '\r',
];

/// Sanitize a string for embedding between double quotes
///
/// Equivalent to stripping [`STRIPPED`] first, then prefixing every original
/// backslash and every double quote with a backslash. Backslashes introduced
/// for quotes are never escaped again.
///
/// # Examples
///
/// ```
/// use jsonlite_wire::json::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("a\\\"b"), "a\\\\\\\"b");
/// assert_eq!(escape("line1\r\nline2"), "line1line2");
/// ```
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            c if STRIPPED.contains(&c) => {}
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c => result.push(c),
        }
    }
    result
}
