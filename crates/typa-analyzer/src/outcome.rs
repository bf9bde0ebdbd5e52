//! Resolution outcomes.
//!
//! The analyzer never fails: every input produces a type. What varies is
//! whether the surrounding driver may trust that type, which is reported as a
//! [`PassStatus`] next to it.

use indexmap::IndexSet;
use typa_types::Type;

/// How settled a resolution result is.
///
/// Ordered by strength; combining two statuses keeps the stronger one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassStatus {
    /// Nothing pending.
    #[default]
    Complete,
    /// Something the result depends on is not materialized yet. The result
    /// is a usable best effort, but the program is not stable.
    Incomplete,
    /// The containing unit must be analyzed again in a later pass; any
    /// placeholder in the result is provisional.
    Deferred,
}

impl PassStatus {
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    pub const fn is_deferred(self) -> bool {
        matches!(self, Self::Deferred)
    }
}

/// A resolved type together with its pass signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub ty: Type,
    pub status: PassStatus,
}

impl Resolution {
    pub fn new(ty: Type, status: PassStatus) -> Self {
        Self { ty, status }
    }

    pub fn complete(ty: Type) -> Self {
        Self::new(ty, PassStatus::Complete)
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    pub fn into_type(self) -> Type {
        self.ty
    }
}

/// Result of resolving an alias definition's right-hand side.
#[derive(Clone, Debug)]
pub struct AliasResolution {
    pub ty: Type,
    /// Fully-qualified names of every alias the target depends on, directly
    /// or through other aliases, in first-use order.
    pub aliases_used: IndexSet<String>,
    pub status: PassStatus,
}
