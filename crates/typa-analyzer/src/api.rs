//! Interface to the semantic-analysis driver.
//!
//! The analyzer reads the symbol table through [`SemanticApi`] and never
//! writes to it. Symbol descriptors are shared (`Arc`) so lookups hand out
//! cheap clones.

use std::fmt;
use std::sync::Arc;
use typa_types::{ClassInfo, Type, TypeOfAny, Variance, short_name};

// =============================================================================
// Symbol descriptors
// =============================================================================

/// A variable (module attribute, class attribute, enum member).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarNode {
    pub fullname: String,
    /// Declared or inferred type, when known.
    pub ty: Option<Type>,
    /// Owning class for class-level variables (enum members in particular).
    pub info: Option<Arc<ClassInfo>>,
}

impl VarNode {
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
            ty: None,
            info: None,
        }
    }

    pub fn name(&self) -> &str {
        short_name(&self.fullname)
    }
}

/// Declaration of a type variable (`T = TypeVar('T', ...)`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeVarExpr {
    pub fullname: String,
    pub values: Vec<Type>,
    pub upper_bound: Type,
    pub variance: Variance,
}

impl TypeVarExpr {
    /// Unconstrained, invariant type variable bounded by `Any`.
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
            values: Vec::new(),
            upper_bound: Type::any(TypeOfAny::SpecialForm),
            variance: Variance::Invariant,
        }
    }

    pub fn name(&self) -> &str {
        short_name(&self.fullname)
    }
}

/// A name whose definition has not been processed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderNode {
    pub fullname: String,
    /// The definition is known to be a class.
    pub becomes_class: bool,
}

/// A type alias definition.
///
/// The target is already resolved; its formals occur in it as unbound
/// references (or type variables) named by `alias_tvars`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAlias {
    pub fullname: String,
    pub target: Type,
    pub alias_tvars: Vec<String>,
    /// Declared without an argument list (`A = List`).
    pub no_args: bool,
    /// Aliases the target itself was built from.
    pub alias_deps: Vec<String>,
}

impl TypeAlias {
    pub fn new(fullname: impl Into<String>, target: Type, alias_tvars: Vec<String>) -> Self {
        Self {
            fullname: fullname.into(),
            target,
            alias_tvars,
            no_args: false,
            alias_deps: Vec::new(),
        }
    }

    /// Alias declared as a bare generic class name (`A = List`).
    pub fn bare(fullname: impl Into<String>, target: Type) -> Self {
        Self {
            no_args: true,
            ..Self::new(fullname, target, Vec::new())
        }
    }
}

/// What a symbol-table entry refers to.
#[derive(Clone, Debug)]
pub enum SymbolNode {
    Class(Arc<ClassInfo>),
    Alias(Arc<TypeAlias>),
    Var(Arc<VarNode>),
    TypeVar(Arc<TypeVarExpr>),
    Placeholder(Arc<PlaceholderNode>),
    Module(String),
    Function(String),
    Decorator(String),
}

impl SymbolNode {
    pub fn fullname(&self) -> &str {
        match self {
            Self::Class(info) => &info.fullname,
            Self::Alias(alias) => &alias.fullname,
            Self::Var(var) => &var.fullname,
            Self::TypeVar(expr) => &expr.fullname,
            Self::Placeholder(node) => &node.fullname,
            Self::Module(name) | Self::Function(name) | Self::Decorator(name) => name,
        }
    }
}

/// Where a symbol was bound.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Local,
    #[default]
    Global,
    Member,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "Ldef",
            Self::Global => "Gdef",
            Self::Member => "Mdef",
        })
    }
}

/// One symbol-table entry.
#[derive(Clone, Debug)]
pub struct SymbolTableNode {
    pub kind: SymbolKind,
    pub fullname: String,
    /// `None` only for malformed entries.
    pub node: Option<SymbolNode>,
}

impl SymbolTableNode {
    pub fn new(node: SymbolNode) -> Self {
        Self {
            kind: SymbolKind::Global,
            fullname: node.fullname().to_string(),
            node: Some(node),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.node, Some(SymbolNode::Placeholder(_)))
    }
}

// =============================================================================
// Driver interface
// =============================================================================

/// Read-only view of the semantic-analysis driver.
pub trait SemanticApi {
    /// Look up a possibly dotted name relative to the current scope.
    fn lookup_qualified(&self, name: &str) -> Option<SymbolTableNode>;

    /// Look up an absolute name.
    fn lookup_fully_qualified(&self, fullname: &str) -> Option<SymbolTableNode>;

    /// Absolute lookup used for names that may legitimately be missing
    /// while builtins are still being processed.
    fn lookup_fully_qualified_or_none(&self, fullname: &str) -> Option<SymbolTableNode> {
        self.lookup_fully_qualified(fullname)
    }

    /// True while the named module still has unprocessed definitions.
    fn is_incomplete_namespace(&self, module: &str) -> bool;

    /// True on the last pass the driver will run.
    fn is_final_iteration(&self) -> bool;
}
