//! typa: type-expression resolver for a gradual static type checker.
//!
//! The workspace is split the same way the data flows:
//!
//! - [`common`]: positions, diagnostics, message templates, options, limits
//! - [`types`]: the canonical `Type` representation and its traversals
//! - [`analyzer`]: resolution of unresolved type expressions against a
//!   symbol table, alias expansion, arity fixup and type-variable binding
//!
//! The most used items are re-exported at the crate root.

pub use typa_analyzer as analyzer;
pub use typa_common as common;
pub use typa_types as types;

pub use typa_analyzer::{
    AliasResolution, AnalyzerFlags, PassStatus, Resolution, SemanticApi, SemanticPass,
    SymbolTable, TypeAnalyzer, TypeVarScope, analyze_type_alias, fix_instance_types,
};
pub use typa_common::{Diagnostic, DiagnosticCollector, DiagnosticSink, Options, Provenance};
pub use typa_types::{Type, TypeOfAny};

// Tracing configuration (text / tree / JSON output for debugging)
pub mod tracing_config;
