//! Writer options
//!
//! Indentation width and line endings are fixed by the format. The only
//! tunable is the depth guard that bounds recursion into nested values.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for [`JsonLiteWriter`](super::JsonLiteWriter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Maximum number of nested container levels below the root value
    ///
    /// The root sits at depth 0. Entering a container whose children would sit
    /// deeper than this fails with `DepthLimitExceeded`.
    pub max_depth: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WriterOptions {
    /// Shallow options for diagnostic log lines
    pub fn shallow() -> Self {
        WriterOptions { max_depth: 8 }
    }

    /// No depth guard; the caller vouches that the graph is acyclic and shallow
    pub fn unbounded() -> Self {
        WriterOptions {
            max_depth: usize::MAX,
        }
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load options from a JSON document, defaulting missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
