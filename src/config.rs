//! Writer configuration.
//!
//! Hosts embed a `WriterOptions` section in their own JSON configuration; this
//! module loads it and reports failures as [`Error::Config`](crate::Error::Config).
//! Only the depth guard is configurable. Indentation and line endings are part
//! of the format.

use crate::error::Result;
use jsonlite_wire::WriterOptions;

/// Parse writer options from a JSON document
///
/// Missing fields take their defaults.
///
/// ```
/// let options = jsonlite::config::options_from_json(r#"{"max_depth": 16}"#)?;
/// assert_eq!(options.max_depth, 16);
/// # Ok::<(), jsonlite::Error>(())
/// ```
pub fn options_from_json(json: &str) -> Result<WriterOptions> {
    Ok(WriterOptions::from_json(json)?)
}

/// Parse the options stored under `key` in a larger JSON configuration
///
/// A missing section yields the default options.
pub fn options_from_section(json: &str, key: &str) -> Result<WriterOptions> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    match document.get(key) {
        Some(section) => Ok(serde_json::from_value(section.clone())?),
        None => Ok(WriterOptions::default()),
    }
}
