//! Type traversal.
//!
//! Three traversal shapes cover every consumer:
//!
//! - [`TypeQuery`]: read-only fold that combines child results with a
//!   strategy (`any`, list concatenation, ...). Implementors override only
//!   the variants they care about.
//! - [`Type::map_children`]: rebuild a type with each direct child replaced,
//!   used for substitution.
//! - [`Type::for_each_child_mut`]: in-place traversal, used for repairs
//!   that must mutate already-resolved types.

use crate::factory::make_union;
use crate::types::*;

impl Type {
    /// Direct children in traversal order.
    ///
    /// Fallback instances, type-variable bounds and literal values are not
    /// children: they are fixed at construction time and never contain
    /// unresolved forms.
    pub fn children(&self) -> Vec<&Type> {
        match self {
            Self::Any(_)
            | Self::None(_)
            | Self::Uninhabited(_)
            | Self::Deleted(_)
            | Self::TypeVar(_)
            | Self::Literal(_)
            | Self::Ellipsis(_)
            | Self::RawExpression(_) => Vec::new(),
            Self::Instance(t) => t.args.iter().collect(),
            Self::Tuple(t) => t.items.iter().collect(),
            Self::Record(t) => t.items.values().collect(),
            Self::Callable(t) => t
                .arg_types
                .iter()
                .chain(std::iter::once(t.ret_type.as_ref()))
                .collect(),
            Self::Union(t) => t.items.iter().collect(),
            Self::TypeType(t) => vec![t.item.as_ref()],
            Self::Star(t) => vec![t.item.as_ref()],
            Self::Placeholder(t) => t.args.iter().collect(),
            Self::Unbound(t) => t.args.iter().collect(),
            Self::TypeList(t) => t.items.iter().collect(),
            Self::CallableArgument(t) => vec![t.typ.as_ref()],
        }
    }

    /// Rebuild this type with every direct child replaced by `f(child)`.
    ///
    /// Unions are re-normalized, so substituting a union into a union member
    /// keeps the result flat.
    pub fn map_children(&self, f: &mut impl FnMut(&Type) -> Type) -> Type {
        match self {
            Self::Any(_)
            | Self::None(_)
            | Self::Uninhabited(_)
            | Self::Deleted(_)
            | Self::TypeVar(_)
            | Self::Literal(_)
            | Self::Ellipsis(_)
            | Self::RawExpression(_) => self.clone(),
            Self::Instance(t) => Self::Instance(Instance {
                args: map_all(&t.args, f),
                ..t.clone()
            }),
            Self::Tuple(t) => Self::Tuple(TupleType {
                items: map_all(&t.items, f),
                ..t.clone()
            }),
            Self::Record(t) => Self::Record(RecordType {
                items: t
                    .items
                    .iter()
                    .map(|(name, item)| (name.clone(), f(item)))
                    .collect(),
                ..t.clone()
            }),
            Self::Callable(t) => Self::Callable(CallableType {
                arg_types: map_all(&t.arg_types, f),
                ret_type: Box::new(f(&t.ret_type)),
                ..t.clone()
            }),
            Self::Union(t) => make_union(map_all(&t.items, f), t.pos),
            Self::TypeType(t) => Self::TypeType(TypeType {
                item: Box::new(f(&t.item)),
                pos: t.pos,
            }),
            Self::Star(t) => Self::Star(StarType {
                item: Box::new(f(&t.item)),
                pos: t.pos,
            }),
            Self::Placeholder(t) => Self::Placeholder(PlaceholderType {
                args: map_all(&t.args, f),
                ..t.clone()
            }),
            Self::Unbound(t) => Self::Unbound(t.copy_with_args(map_all(&t.args, f))),
            Self::TypeList(t) => Self::TypeList(TypeList {
                items: map_all(&t.items, f),
                pos: t.pos,
            }),
            Self::CallableArgument(t) => Self::CallableArgument(CallableArgument {
                typ: Box::new(f(&t.typ)),
                ..t.clone()
            }),
        }
    }

    /// Visit every direct child mutably.
    pub fn for_each_child_mut(&mut self, f: &mut impl FnMut(&mut Type)) {
        match self {
            Self::Any(_)
            | Self::None(_)
            | Self::Uninhabited(_)
            | Self::Deleted(_)
            | Self::TypeVar(_)
            | Self::Literal(_)
            | Self::Ellipsis(_)
            | Self::RawExpression(_) => {}
            Self::Instance(t) => t.args.iter_mut().for_each(f),
            Self::Tuple(t) => t.items.iter_mut().for_each(f),
            Self::Record(t) => t.items.values_mut().for_each(f),
            Self::Callable(t) => {
                t.arg_types.iter_mut().for_each(&mut *f);
                f(&mut t.ret_type);
            }
            Self::Union(t) => t.items.iter_mut().for_each(f),
            Self::TypeType(t) => f(&mut t.item),
            Self::Star(t) => f(&mut t.item),
            Self::Placeholder(t) => t.args.iter_mut().for_each(f),
            Self::Unbound(t) => t.args.iter_mut().for_each(f),
            Self::TypeList(t) => t.items.iter_mut().for_each(f),
            Self::CallableArgument(t) => f(&mut t.typ),
        }
    }

    /// Post-order traversal: children first, then `self`.
    pub fn walk_post_order_mut(&mut self, f: &mut impl FnMut(&mut Type)) {
        self.for_each_child_mut(&mut |child: &mut Type| child.walk_post_order_mut(f));
        f(self);
    }
}

fn map_all(items: &[Type], f: &mut impl FnMut(&Type) -> Type) -> Vec<Type> {
    items.iter().map(|item| f(item)).collect()
}

/// Read-only fold over a type.
///
/// Every `visit_*` method defaults to querying the variant's children and
/// combining the results, so an implementation overrides only the variants it
/// treats specially.
pub trait TypeQuery {
    type Output;

    /// Combine child results (the query's strategy).
    fn combine(&mut self, parts: Vec<Self::Output>) -> Self::Output;

    fn query(&mut self, ty: &Type) -> Self::Output {
        walk_query(self, ty)
    }

    fn query_types(&mut self, types: Vec<&Type>) -> Self::Output {
        let parts = types.into_iter().map(|ty| self.query(ty)).collect();
        self.combine(parts)
    }

    fn visit_any(&mut self, _t: &AnyType) -> Self::Output {
        self.combine(Vec::new())
    }

    fn visit_type_var(&mut self, _t: &TypeVarType) -> Self::Output {
        self.combine(Vec::new())
    }

    fn visit_instance(&mut self, t: &Instance) -> Self::Output {
        self.query_types(t.args.iter().collect())
    }

    fn visit_record(&mut self, t: &RecordType) -> Self::Output {
        self.query_types(t.items.values().collect())
    }

    fn visit_callable(&mut self, t: &CallableType) -> Self::Output {
        self.query_types(
            t.arg_types
                .iter()
                .chain(std::iter::once(t.ret_type.as_ref()))
                .collect(),
        )
    }

    fn visit_unbound(&mut self, t: &UnboundType) -> Self::Output {
        self.query_types(t.args.iter().collect())
    }

    /// Any variant without a dedicated hook.
    fn visit_other(&mut self, ty: &Type) -> Self::Output {
        self.query_types(ty.children())
    }
}

/// Dispatch `ty` to the matching `visit_*` method of `query`.
pub fn walk_query<Q: TypeQuery + ?Sized>(query: &mut Q, ty: &Type) -> Q::Output {
    match ty {
        Type::Any(t) => query.visit_any(t),
        Type::TypeVar(t) => query.visit_type_var(t),
        Type::Instance(t) => query.visit_instance(t),
        Type::Record(t) => query.visit_record(t),
        Type::Callable(t) => query.visit_callable(t),
        Type::Unbound(t) => query.visit_unbound(t),
        other => query.visit_other(other),
    }
}

/// Strategy helper: keep the first occurrence of each element.
pub fn flatten_unique<T: PartialEq>(parts: Vec<Vec<T>>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in parts.into_iter().flatten() {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/visitor_tests.rs"]
mod visitor_tests;
