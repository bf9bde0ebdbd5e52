use super::*;
use std::sync::Arc;
use typa_common::DiagnosticCollector;
use typa_types::{ClassInfo, make_union};

fn class(fullname: &str, type_vars: &[&str]) -> Arc<ClassInfo> {
    Arc::new(ClassInfo::generic(fullname, type_vars))
}

fn int() -> Type {
    Type::instance(&class("builtins.int", &[]), Vec::new())
}

#[test]
fn test_nongen_builtins() {
    assert_eq!(nongen_builtin("builtins.list"), Some("typing.List"));
    assert_eq!(nongen_builtin("builtins.enumerate"), Some(""));
    assert_eq!(nongen_builtin("m.Box"), None);
    assert_eq!(
        no_subscript_builtin_alias("collections.deque", true),
        "\"deque\" is not subscriptable, use \"typing.Deque\" instead"
    );
    assert_eq!(
        no_subscript_builtin_alias("builtins.enumerate", true),
        "\"enumerate\" is not subscriptable"
    );
}

#[test]
fn test_omitted_arguments_are_filled() {
    let mut diags = DiagnosticCollector::new();
    let mut instance = Instance::new(class("builtins.dict", &["KT", "VT"]), Vec::new());
    fix_instance(&mut instance, &mut diags, false, false, None);
    assert_eq!(instance.args.len(), 2);
    assert!(
        instance
            .args
            .iter()
            .all(|arg| arg.type_of_any() == Some(TypeOfAny::FromOmittedGenerics))
    );
    assert!(!instance.invalid);
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn test_strict_omission_of_user_class() {
    let mut diags = DiagnosticCollector::new();
    let mut instance = Instance::new(class("m.Box", &["T"]), Vec::new());
    fix_instance(&mut instance, &mut diags, true, false, None);
    assert_eq!(instance.args[0].type_of_any(), Some(TypeOfAny::FromError));
    assert!(diags.has_error_containing("Missing type parameters for generic type \"Box\""));
}

#[test]
fn test_strict_omission_of_enumerate_has_no_replacement() {
    let mut diags = DiagnosticCollector::new();
    let mut instance = Instance::new(class("builtins.enumerate", &["T"]), Vec::new());
    fix_instance(&mut instance, &mut diags, true, false, None);
    assert!(diags.has_error_containing("Missing type parameters for generic type \"enumerate\""));
}

#[test]
fn test_wrong_count_messages() {
    let cases = [
        (&[][..], 1, "\"Box\" expects no type arguments, but 1 given"),
        (&["T"][..], 2, "\"Box\" expects 1 type argument, but 2 given"),
        (&["A", "B", "C"][..], 1, "\"Box\" expects 3 type arguments, but 1 given"),
    ];
    for (type_vars, given, message) in cases {
        let mut diags = DiagnosticCollector::new();
        let mut instance = Instance::new(class("m.Box", type_vars), vec![int(); given]);
        fix_instance(&mut instance, &mut diags, false, false, None);
        assert!(instance.invalid);
        assert_eq!(instance.args.len(), type_vars.len());
        assert!(diags.has_error_containing(message), "{:?}", diags.messages());
    }
}

#[test]
fn test_correct_count_is_untouched() {
    let mut diags = DiagnosticCollector::new();
    let mut instance = Instance::new(class("m.Box", &["T"]), vec![int()]);
    let before = instance.clone();
    fix_instance(&mut instance, &mut diags, true, false, None);
    assert_eq!(Type::Instance(instance), Type::Instance(before));
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn test_fix_instance_types_repairs_nested_instances() {
    let dict = class("builtins.dict", &["KT", "VT"]);
    let list = class("builtins.list", &["T"]);
    let mut ty = make_union(
        [
            Type::instance(&dict, Vec::new()),
            Type::instance(&list, vec![int(), int()]),
        ],
        Provenance::UNKNOWN,
    );
    let mut diags = DiagnosticCollector::new();
    fix_instance_types(&mut ty, &mut diags);

    let items = &ty.as_union().expect("union").items;
    assert_eq!(items[0].as_instance().map(|i| i.args.len()), Some(2));
    let list = items[1].as_instance().expect("list");
    assert_eq!(list.args.len(), 1);
    assert!(list.invalid);
    assert_eq!(diags.error_count(), 1);
    assert!(diags.has_error_containing("\"list\" expects 1 type argument, but 2 given"));
}

#[test]
fn test_fix_instance_types_cuts_off_past_depth_limit() {
    let list = class("builtins.list", &["T"]);
    let mut ty = int();
    for _ in 0..MAX_SUBSTITUTION_DEPTH + 10 {
        ty = Type::instance(&list, vec![ty]);
    }
    let mut diags = DiagnosticCollector::new();
    fix_instance_types(&mut ty, &mut diags);

    let mut depth = 0;
    let mut current = &ty;
    while let Some(arg) = current.as_instance().and_then(|instance| instance.args.first()) {
        depth += 1;
        current = arg;
    }
    assert_eq!(depth, MAX_SUBSTITUTION_DEPTH);
    assert_eq!(current.type_of_any(), Some(TypeOfAny::FromError));
    assert_eq!(diags.error_count(), 1);
    assert!(diags.has_error_containing("Type expression is nested too deeply"));
}
