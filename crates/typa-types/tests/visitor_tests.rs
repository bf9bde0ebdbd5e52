use super::*;
use std::sync::Arc;
use typa_common::Provenance;

fn named(fullname: &str) -> Type {
    Type::instance(&Arc::new(ClassInfo::new(fullname)), Vec::new())
}

fn list_of(item: Type) -> Type {
    Type::instance(&Arc::new(ClassInfo::generic("builtins.list", &["T"])), vec![item])
}

/// Counts unbound references named `name`.
struct CountUnbound<'a>(&'a str);

impl TypeQuery for CountUnbound<'_> {
    type Output = usize;

    fn combine(&mut self, parts: Vec<usize>) -> usize {
        parts.into_iter().sum()
    }

    fn visit_unbound(&mut self, t: &UnboundType) -> usize {
        let own = usize::from(t.name == self.0);
        own + self.query_types(t.args.iter().collect())
    }
}

#[test]
fn test_children_of_callable_include_return_type() {
    let callable = Type::Callable(CallableType::new(
        vec![named("m.A"), named("m.B")],
        vec![ArgKind::Pos, ArgKind::Pos],
        vec![None, None],
        named("m.C"),
    ));
    let children = callable.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[2], &named("m.C"));
}

#[test]
fn test_leaf_variants_have_no_children() {
    assert!(Type::none().children().is_empty());
    assert!(Type::error().children().is_empty());
    assert!(Type::Ellipsis(EllipsisType::default()).children().is_empty());
}

#[test]
fn test_query_reaches_nested_positions() {
    let t = || Type::unbound("T", Vec::new());
    let callable = Type::Callable(CallableType::new(
        vec![list_of(t())],
        vec![ArgKind::Pos],
        vec![None],
        Type::unbound("Dict", vec![named("m.A"), t()]),
    ));
    let wrapped = Type::Union(UnionType::new(
        vec![callable, t()],
        Provenance::UNKNOWN,
    ));
    assert_eq!(CountUnbound("T").query(&wrapped), 3);
}

#[test]
fn test_map_children_rebuilds_structure() {
    let source = list_of(Type::unbound("T", Vec::new()));
    let mapped = source.map_children(&mut |child: &Type| match child {
        Type::Unbound(u) if u.name == "T" => named("m.A"),
        other => other.clone(),
    });
    assert_eq!(mapped, list_of(named("m.A")));
}

#[test]
fn test_map_children_renormalizes_unions() {
    let union = Type::Union(UnionType::new(
        vec![Type::unbound("T", Vec::new()), named("m.C")],
        Provenance::UNKNOWN,
    ));
    let replacement = Type::Union(UnionType::new(
        vec![named("m.A"), named("m.C")],
        Provenance::UNKNOWN,
    ));
    let mapped = union.map_children(&mut |child: &Type| match child {
        Type::Unbound(_) => replacement.clone(),
        other => other.clone(),
    });
    let items = &mapped.as_union().expect("union").items;
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.as_union().is_none()));
}

#[test]
fn test_walk_post_order_mut_visits_children_first() {
    let mut ty = list_of(list_of(named("m.A")));
    let mut seen = Vec::new();
    ty.walk_post_order_mut(&mut |node: &mut Type| {
        seen.push(node.to_string());
    });
    assert_eq!(seen, vec!["A", "list[A]", "list[list[A]]"]);
}

#[test]
fn test_for_each_child_mut_replaces_in_place() {
    let mut ty = list_of(Type::error());
    ty.for_each_child_mut(&mut |child: &mut Type| *child = named("m.B"));
    assert_eq!(ty, list_of(named("m.B")));
}

#[test]
fn test_flatten_unique_keeps_first_occurrence() {
    let merged = flatten_unique(vec![vec![1, 2], vec![2, 3, 1]]);
    assert_eq!(merged, vec![1, 2, 3]);
}
