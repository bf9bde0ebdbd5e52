//! Type-Expression Resolver
//!
//! Turns the unresolved type expressions produced by a parser into canonical
//! types, against a read-only symbol table supplied by the semantic-analysis
//! driver.
//!
//! - `analyzer`: the resolver itself (`TypeAnalyzer`, `analyze_type_alias`)
//! - `special_forms`, `callable`, `literal`: construction of `typing` forms
//! - `alias`: alias expansion
//! - `fixup`: generic arity repair
//! - `scope`, `collector`: type-variable binding
//! - `symbols`: in-memory `SemanticApi` and the multi-pass driver loop
//!
//! Resolution never fails. Errors are reported to a `DiagnosticSink` and
//! replaced by `Any`; forward references surface as a `PassStatus` on the
//! returned `Resolution`.

pub mod alias;
pub mod analyzer;
pub mod api;
pub mod callable;
pub mod collector;
pub mod fixup;
pub mod flags;
pub mod hooks;
mod literal;
pub mod outcome;
pub mod scope;
pub mod special_forms;
pub mod symbols;

pub use alias::{expand_type_alias, replace_alias_tvars, set_any_tvars};
pub use analyzer::{Nesting, TypeAnalyzer, analyze_type_alias, check_for_explicit_any};
pub use api::{
    PlaceholderNode, SemanticApi, SymbolKind, SymbolNode, SymbolTableNode, TypeAlias, TypeVarExpr,
    VarNode,
};
pub use callable::{check_arg_kinds, check_arg_names};
pub use collector::{TypeVariableQuery, infer_type_variables};
pub use fixup::{fix_instance, fix_instance_types, get_omitted_any};
pub use flags::AnalyzerFlags;
pub use hooks::{
    AnalyzeTypeContext, HookRegistry, NoPlugins, PluginRegistry, TypeAnalyzeHook,
    TypeAnalyzerPluginInterface,
};
pub use outcome::{AliasResolution, PassStatus, Resolution};
pub use scope::TypeVarScope;
pub use symbols::{PassReport, SemanticPass, SymbolTable};
