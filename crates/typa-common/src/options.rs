//! Global analysis options.
//!
//! These are the options the resolver consumes but does not own. Hosts load
//! them from a JSON configuration object:
//!
//! ```json
//! { "disallow_any_generics": true, "python_version": [3, 8] }
//! ```
//!
//! Unknown keys are ignored so that a shared configuration file can carry
//! options for other tools.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Omitted generic arguments (`x: List`) are an error instead of an
    /// implicit `Any`.
    pub disallow_any_generics: bool,
    /// Explicit `Any` in an annotation is an error.
    pub disallow_any_explicit: bool,
    /// Target language version as `(major, minor)`.
    pub python_version: (u8, u8),
}

impl Default for Options {
    fn default() -> Self {
        Self {
            disallow_any_generics: false,
            disallow_any_explicit: false,
            python_version: (3, 8),
        }
    }
}

impl Options {
    /// Parse options from a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid typa options JSON")
    }

    /// Read and parse options from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub const fn is_python2(&self) -> bool {
        self.python_version.0 == 2
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
