//! Source provenance for type nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Line/column pair recording where a type node came from.
///
/// `-1` means "unknown". Equality and hashing ignore provenance entirely, so
/// two types built from different source locations still compare equal when
/// their structure matches.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Provenance {
    pub line: i32,
    pub column: i32,
}

impl Provenance {
    /// Provenance of a synthesized node with no source location.
    pub const UNKNOWN: Self = Self {
        line: -1,
        column: -1,
    };

    pub const fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }

    pub const fn at_line(line: i32) -> Self {
        Self { line, column: -1 }
    }

    pub const fn is_known(self) -> bool {
        self.line >= 0
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl PartialEq for Provenance {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Provenance {}

impl Hash for Provenance {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (line, _) if line < 0 => f.write_str("<unknown>"),
            (line, column) if column < 0 => write!(f, "{line}"),
            (line, column) => write!(f, "{line}:{column}"),
        }
    }
}
