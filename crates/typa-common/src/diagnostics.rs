//! Diagnostics reported by the analyzer.
//!
//! The analyzer never fails: every problem becomes a `Diagnostic` pushed into a
//! [`DiagnosticSink`] supplied by the caller, and resolution continues with an
//! error placeholder type. Rendering is the host's concern.

use crate::position::Provenance;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Error,
    Note,
}

/// Machine-readable error code attached to a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode {
    pub code: &'static str,
    pub description: &'static str,
}

impl ErrorCode {
    pub const fn new(code: &'static str, description: &'static str) -> Self {
        Self { code, description }
    }
}

/// Error codes emitted by the analyzer.
pub mod codes {
    use super::ErrorCode;

    pub const VALID_TYPE: ErrorCode = ErrorCode::new("valid-type", "Check that type is valid");
    pub const TYPE_ARG: ErrorCode =
        ErrorCode::new("type-arg", "Check that generic type arguments are present");
    pub const SYNTAX: ErrorCode = ErrorCode::new("syntax", "Report syntax errors");
    pub const MISC: ErrorCode = ErrorCode::new("misc", "Miscellaneous other checks");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub line: i32,
    pub column: i32,
    pub message_text: String,
    pub code: Option<ErrorCode>,
}

impl Diagnostic {
    pub fn error(at: Provenance, message: impl Into<String>, code: Option<ErrorCode>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            line: at.line,
            column: at.column,
            message_text: message.into(),
            code,
        }
    }

    pub fn note(at: Provenance, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Note,
            line: at.line,
            column: at.column,
            message_text: message.into(),
            code: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

/// Destination for diagnostics produced during resolution.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    fn fail(&mut self, at: Provenance, message: String, code: Option<ErrorCode>) {
        self.report(Diagnostic::error(at, message, code));
    }

    fn note(&mut self, at: Provenance, message: String) {
        self.report(Diagnostic::note(at, message));
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics and answers simple queries about them.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// True when some error message contains `needle`.
    pub fn has_error_containing(&self, needle: &str) -> bool {
        self.errors().any(|d| d.message_text.contains(needle))
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .map(|d| d.message_text.as_str())
            .collect()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
