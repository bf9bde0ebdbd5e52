//! Per-call analyzer switches.

use bitflags::bitflags;

bitflags! {
    /// Context switches for one analyzer instance.
    ///
    /// Global policy lives in [`Options`](typa_common::Options); these flags
    /// describe the call site.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct AnalyzerFlags: u16 {
        /// Resolving the right-hand side of an alias definition: arity is
        /// checked at each use site instead, and unbound type variables are
        /// the alias's formals.
        const DEFINING_ALIAS = 1 << 0;
        /// Bare `(A, B)` tuple syntax is accepted.
        const ALLOW_TUPLE_LITERAL = 1 << 1;
        /// Trusted interface declaration: `list[int]` is accepted.
        const ALLOW_UNNORMALIZED = 1 << 2;
        /// Free type variables resolve to themselves instead of an error.
        const ALLOW_UNBOUND_TVARS = 1 << 3;
        /// Forward references to classes become placeholder types and defer
        /// the unit, instead of recording an incomplete reference.
        const ALLOW_PLACEHOLDER = 1 << 4;
        /// Report raw scalar expressions used as types.
        const REPORT_INVALID_TYPES = 1 << 5;
        /// The unit is a bundled stub: omitted generics are never an error.
        const TYPESHED_STUB = 1 << 6;
    }
}

impl Default for AnalyzerFlags {
    fn default() -> Self {
        Self::REPORT_INVALID_TYPES
    }
}
