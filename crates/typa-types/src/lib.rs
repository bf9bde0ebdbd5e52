//! Canonical type representation for the typa type-expression resolver.
//!
//! This crate owns the data model shared by the analyzer and its consumers:
//! - The closed `Type` sum, canonical and synthetic variants alike
//! - Canonical constructors (`make_union`, `make_optional`, `make_type_type`)
//! - Traversal (`TypeQuery`, `map_children`, `for_each_child_mut`)
//! - Surface-syntax rendering for diagnostics
//! - Whole-type queries (`has_explicit_any`, `get_type_vars`, ...)

// Type representation
pub mod types;
pub use types::*;

// Canonical constructors
pub mod factory;
pub use factory::{make_optional, make_type_type, make_union, union_items};

// Traversal
pub mod visitor;
pub use visitor::{TypeQuery, flatten_unique, walk_query};

// Display
pub mod format;

// Queries
pub mod queries;
pub use queries::{
    collect_all_inner_types, collect_any_types, get_type_vars, has_any_from_unimported_type,
    has_explicit_any,
};
