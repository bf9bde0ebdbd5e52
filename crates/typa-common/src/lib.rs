//! Common types and utilities for the typa type-expression resolver.
//!
//! This crate provides foundational types used across all typa crates:
//! - Source provenance (`Provenance`) attached to every type node
//! - Diagnostics (`Diagnostic`, `ErrorCode`, `DiagnosticSink`)
//! - Message templates for every diagnostic the analyzer emits
//! - Analysis options loaded from JSON
//! - Resolution limits and thresholds

// Source provenance (line/column) for type nodes
pub mod position;
pub use position::Provenance;

// Centralized limits and thresholds
pub mod limits;

// Global analysis options
pub mod options;
pub use options::Options;

// Diagnostics and message templates
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticCollector, DiagnosticSink, ErrorCode, codes,
    format_message,
};
pub mod messages;
