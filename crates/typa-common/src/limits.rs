//! Centralized limits and thresholds for type-expression resolution.
//!
//! Resolution is recursive over the structure of a type expression and runs
//! inside a multi-pass driver. These limits keep both dimensions bounded.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth of a single type expression.
///
/// Each bracketed argument level adds several frames to the resolver's
/// recursion (alias expansion, special forms, arity fixup), a few kilobytes
/// of stack per level in unoptimized builds. The limit keeps the deepest
/// accepted expression well inside a 2 MB thread stack. Past this depth the
/// resolver reports an error and substitutes an error-`Any` instead of
/// recursing further.
///
/// ```python
/// x: List[List[List[List[ ... 100 levels ... ]]]]
/// ```
pub const MAX_TYPE_NESTING_DEPTH: u32 = 100;

/// Maximum depth for recursive alias substitution and instance repair.
///
/// Targets produced by the resolver are bounded by
/// [`MAX_TYPE_NESTING_DEPTH`]; this bounds hand-built inputs. Subtrees below
/// the limit are replaced by an error-`Any` and reported.
pub const MAX_SUBSTITUTION_DEPTH: u32 = 128;

// =============================================================================
// Pass Limits
// =============================================================================

/// Maximum number of semantic-analysis passes before the driver declares the
/// final iteration.
///
/// Forward references that are still placeholders on the final pass are
/// reported as "possible cyclic definition" instead of being deferred again.
pub const MAX_SEMANAL_PASSES: u32 = 20;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity of the union flattening buffer.
///
/// Most unions in real annotations have at most a handful of members, so the
/// flattening buffer stays on the stack.
pub const UNION_INLINE_MEMBERS: usize = 8;
