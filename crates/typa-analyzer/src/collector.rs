//! Inference of the type variables a signature quantifies over.

use crate::api::{SemanticApi, SymbolNode, TypeVarExpr};
use crate::scope::TypeVarScope;
use crate::special_forms::LITERAL_NAMES;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use typa_types::{CallableType, Type, TypeQuery, UnboundType, flatten_unique};

/// A type-variable reference found in a signature: the name as written and
/// its declaration.
pub type TypeVarRef = (String, Arc<TypeVarExpr>);

/// Collects unbound references that name type variables.
///
/// Literal arguments are never searched: `Literal["T"]` does not quantify
/// over `T`.
pub struct TypeVariableQuery<'a> {
    api: &'a dyn SemanticApi,
    scope: &'a TypeVarScope,
    /// Look inside callables (and things that look like unresolved ones).
    include_callables: bool,
    /// Report variables that are already bound in `scope` too.
    include_bound_tvars: bool,
}

impl<'a> TypeVariableQuery<'a> {
    pub fn new(api: &'a dyn SemanticApi, scope: &'a TypeVarScope) -> Self {
        Self {
            api,
            scope,
            include_callables: true,
            include_bound_tvars: false,
        }
    }

    pub fn include_callables(mut self, include: bool) -> Self {
        self.include_callables = include;
        self
    }

    pub fn include_bound_tvars(mut self, include: bool) -> Self {
        self.include_bound_tvars = include;
        self
    }

    /// `Callable[[...], R]` or `Callable[..., R]` before resolution.
    fn seems_like_callable(t: &UnboundType) -> bool {
        matches!(
            t.args.first(),
            Some(Type::Ellipsis(_) | Type::TypeList(_))
        )
    }
}

impl TypeQuery for TypeVariableQuery<'_> {
    type Output = Vec<TypeVarRef>;

    fn combine(&mut self, parts: Vec<Vec<TypeVarRef>>) -> Vec<TypeVarRef> {
        flatten_unique(parts)
    }

    fn visit_unbound(&mut self, t: &UnboundType) -> Vec<TypeVarRef> {
        let sym = self.api.lookup_qualified(&t.name);
        if let Some(SymbolNode::TypeVar(expr)) = sym.as_ref().and_then(|sym| sym.node.as_ref())
            && (self.include_bound_tvars || self.scope.get_binding(&expr.fullname).is_none())
        {
            return vec![(t.name.clone(), Arc::clone(expr))];
        }
        if !self.include_callables && Self::seems_like_callable(t) {
            return Vec::new();
        }
        if sym.is_some_and(|sym| LITERAL_NAMES.contains(&sym.fullname.as_str())) {
            return Vec::new();
        }
        self.query_types(t.args.iter().collect())
    }

    fn visit_callable(&mut self, t: &CallableType) -> Vec<TypeVarRef> {
        if !self.include_callables {
            return Vec::new();
        }
        self.query_types(
            t.arg_types
                .iter()
                .chain(std::iter::once(t.ret_type.as_ref()))
                .collect(),
        )
    }
}

/// Distinct type variables referenced by `callable`, in first-occurrence
/// order.
///
/// Argument types are searched fully. The return type is searched without
/// entering callables: a variable that only occurs in a returned callable
/// belongs to that callable.
pub fn infer_type_variables(
    api: &dyn SemanticApi,
    scope: &TypeVarScope,
    callable: &CallableType,
) -> Vec<TypeVarRef> {
    let mut found: Vec<TypeVarRef> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut push_new = |refs: Vec<TypeVarRef>| {
        for (name, expr) in refs {
            if seen.insert(name.clone()) {
                found.push((name, expr));
            }
        }
    };

    for arg in &callable.arg_types {
        let refs = TypeVariableQuery::new(api, scope).query(arg);
        push_new(refs);
    }
    let refs = TypeVariableQuery::new(api, scope)
        .include_callables(false)
        .query(&callable.ret_type);
    push_new(refs);
    found
}

#[cfg(test)]
#[path = "../tests/collector_tests.rs"]
mod collector_tests;
