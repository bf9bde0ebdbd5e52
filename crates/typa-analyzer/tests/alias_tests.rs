use super::*;
use std::sync::Arc;
use typa_common::DiagnosticCollector;
use typa_types::{ArgKind, CallableType, ClassInfo};

fn class(fullname: &str, type_vars: &[&str]) -> Arc<ClassInfo> {
    Arc::new(ClassInfo::generic(fullname, type_vars))
}

fn plain(fullname: &str) -> Type {
    Type::instance(&class(fullname, &[]), Vec::new())
}

fn vars(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn test_non_generic_alias_returns_target() {
    let target = plain("builtins.int");
    let alias = TypeAlias::new("m.Int", target.clone(), Vec::new());
    let mut diags = DiagnosticCollector::new();
    let expanded = expand_type_alias(&alias, Vec::new(), Provenance::UNKNOWN, None, false, &mut diags);
    assert_eq!(expanded, target);
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn test_bare_alias_strips_or_applies_arguments() {
    let list = class("builtins.list", &["T"]);
    let target = Type::instance(&list, vec![Type::any(TypeOfAny::SpecialForm)]);
    let alias = TypeAlias::bare("typing.List", target);
    let mut diags = DiagnosticCollector::new();

    let bare = expand_type_alias(&alias, Vec::new(), Provenance::UNKNOWN, None, false, &mut diags);
    assert_eq!(bare, Type::instance(&list, Vec::new()));

    let applied = expand_type_alias(
        &alias,
        vec![plain("builtins.int"), plain("builtins.str")],
        Provenance::UNKNOWN,
        None,
        false,
        &mut diags,
    );
    assert_eq!(
        applied,
        Type::instance(&list, vec![plain("builtins.int"), plain("builtins.str")])
    );
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn test_substitution_reaches_nested_generics_and_callables() {
    let dict = class("builtins.dict", &["KT", "VT"]);
    let list = class("builtins.list", &["T"]);
    let callback = Type::Callable(CallableType::new(
        vec![Type::unbound("T", Vec::new())],
        vec![ArgKind::Pos],
        vec![None],
        Type::unbound("T", Vec::new()),
    ));
    let target = Type::instance(
        &dict,
        vec![
            Type::unbound("K", Vec::new()),
            Type::instance(&list, vec![callback]),
        ],
    );
    let alias = TypeAlias::new("m.Registry", target, vars(&["K", "T"]));
    let mut diags = DiagnosticCollector::new();
    let expanded = expand_type_alias(
        &alias,
        vec![plain("builtins.str"), plain("builtins.int")],
        Provenance::at_line(4),
        None,
        false,
        &mut diags,
    );
    assert_eq!(expanded.to_string(), "dict[str, list[Callable[[int], int]]]");
    assert_eq!(expanded.pos().line, 4);
}

#[test]
fn test_generic_alias_without_arguments() {
    let list = class("builtins.list", &["T"]);
    let alias = TypeAlias::new(
        "m.Vec",
        Type::instance(&list, vec![Type::unbound("T", Vec::new())]),
        vars(&["T"]),
    );
    let mut diags = DiagnosticCollector::new();
    let expanded = expand_type_alias(&alias, Vec::new(), Provenance::UNKNOWN, None, false, &mut diags);
    let arg = &expanded.as_instance().expect("instance").args[0];
    assert_eq!(arg.type_of_any(), Some(TypeOfAny::FromOmittedGenerics));
    assert!(diags.diagnostics().is_empty());

    let expanded = expand_type_alias(
        &alias,
        Vec::new(),
        Provenance::UNKNOWN,
        Some("Vec"),
        true,
        &mut diags,
    );
    let arg = &expanded.as_instance().expect("instance").args[0];
    assert_eq!(arg.type_of_any(), Some(TypeOfAny::FromError));
    assert!(diags.has_error_containing("Missing type parameters for generic type \"Vec\""));
}

#[test]
fn test_wrong_argument_count_substitutes_error_any() {
    let list = class("builtins.list", &["T"]);
    let alias = TypeAlias::new(
        "m.Vec",
        Type::instance(&list, vec![Type::unbound("T", Vec::new())]),
        vars(&["T"]),
    );
    let mut diags = DiagnosticCollector::new();
    let expanded = expand_type_alias(
        &alias,
        vec![plain("builtins.int"), plain("builtins.str")],
        Provenance::UNKNOWN,
        None,
        false,
        &mut diags,
    );
    let arg = &expanded.as_instance().expect("instance").args[0];
    assert_eq!(arg.type_of_any(), Some(TypeOfAny::FromError));
    assert!(diags.has_error_containing(
        "Bad number of arguments for type alias, expected: 1, given: 2"
    ));
}

#[test]
fn test_flexible_alias_unwraps_to_second_argument() {
    let flexible = class(FLEXIBLE_ALIAS, &["T", "U"]);
    let target = Type::instance(
        &flexible,
        vec![Type::unbound("T", Vec::new()), plain("builtins.int")],
    );
    let alias = TypeAlias::new("m.Flex", target, vars(&["T"]));
    let mut diags = DiagnosticCollector::new();
    let expanded = expand_type_alias(
        &alias,
        vec![plain("builtins.str")],
        Provenance::UNKNOWN,
        None,
        false,
        &mut diags,
    );
    assert_eq!(expanded, plain("builtins.int"));
}

#[test]
fn test_root_formal_is_replaced() {
    let replaced = replace_alias_tvars(
        &Type::unbound("T", Vec::new()),
        &vars(&["T"]),
        &[plain("builtins.int")],
        Provenance::UNKNOWN,
        &mut DiagnosticCollector::new(),
    );
    assert_eq!(replaced, plain("builtins.int"));
}

#[test]
fn test_non_matching_names_are_left_alone() {
    let target = Type::unbound("U", Vec::new());
    let replaced = replace_alias_tvars(
        &target,
        &vars(&["T"]),
        &[plain("builtins.int")],
        Provenance::UNKNOWN,
        &mut DiagnosticCollector::new(),
    );
    assert_eq!(replaced, target);
}

/// Follow the first argument of nested instances down to the leaf.
fn innermost(ty: &Type) -> (usize, &Type) {
    let mut depth = 0;
    let mut current = ty;
    while let Some(arg) = current.as_instance().and_then(|instance| instance.args.first()) {
        depth += 1;
        current = arg;
    }
    (depth, current)
}

#[test]
fn test_substitution_past_depth_limit_leaves_no_formal() {
    let list = class("builtins.list", &["T"]);
    let mut target = Type::unbound("T", Vec::new());
    for _ in 0..MAX_SUBSTITUTION_DEPTH + 20 {
        target = Type::instance(&list, vec![target]);
    }
    let alias = TypeAlias::new("m.Deep", target, vars(&["T"]));
    let mut diags = DiagnosticCollector::new();
    let expanded = expand_type_alias(
        &alias,
        vec![plain("builtins.int")],
        Provenance::UNKNOWN,
        Some("Deep"),
        false,
        &mut diags,
    );

    let (depth, leaf) = innermost(&expanded);
    assert_eq!(depth, MAX_SUBSTITUTION_DEPTH as usize);
    assert_eq!(leaf.type_of_any(), Some(TypeOfAny::FromError));
    assert_eq!(diags.error_count(), 1);
    assert!(diags.has_error_containing("Type expression is nested too deeply"));
}

#[test]
fn test_substitution_within_depth_limit_is_complete() {
    let list = class("builtins.list", &["T"]);
    let mut target = Type::unbound("T", Vec::new());
    for _ in 0..MAX_SUBSTITUTION_DEPTH {
        target = Type::instance(&list, vec![target]);
    }
    let mut diags = DiagnosticCollector::new();
    let replaced = replace_alias_tvars(
        &target,
        &vars(&["T"]),
        &[plain("builtins.int")],
        Provenance::UNKNOWN,
        &mut diags,
    );
    let (depth, leaf) = innermost(&replaced);
    assert_eq!(depth, MAX_SUBSTITUTION_DEPTH as usize);
    assert_eq!(*leaf, plain("builtins.int"));
    assert!(diags.diagnostics().is_empty());
}
