use super::*;
use crate::api::SymbolKind;

#[test]
fn test_prelude_contents() {
    let table = SymbolTable::with_prelude("m");
    assert_eq!(table.class("builtins.dict").map(|info| info.arity()), Some(2));
    assert_eq!(table.class("builtins.int").map(|info| info.arity()), Some(0));
    assert!(matches!(
        table.get("typing.List").and_then(|sym| sym.node.clone()),
        Some(SymbolNode::Alias(alias)) if alias.no_args
    ));
    assert!(matches!(
        table.get("mypy_extensions.VarArg").and_then(|sym| sym.node.clone()),
        Some(SymbolNode::Function(_))
    ));
    assert!(table.get("typing").is_some());
}

#[test]
fn test_lookup_order() {
    let mut table = SymbolTable::with_prelude("m");
    table.add_class(ClassInfo::new("m.int"));
    table.import("Seq", "typing.List");

    // Module-level names shadow builtins.
    let int = table.lookup_qualified("int").expect("int");
    assert_eq!(int.fullname, "m.int");

    let seq = table.lookup_qualified("Seq").expect("import");
    assert_eq!(seq.fullname, "typing.List");

    let str_ = table.lookup_qualified("str").expect("builtin");
    assert_eq!(str_.fullname, "builtins.str");
    assert_eq!(str_.kind, SymbolKind::Global);

    assert!(table.lookup_qualified("missing").is_none());
}

#[test]
fn test_lookup_through_imported_module() {
    let mut table = SymbolTable::with_prelude("m");
    table.import("t", "typing");
    let sym = table.lookup_qualified("t.Dict").expect("typing.Dict");
    assert_eq!(sym.fullname, "typing.Dict");
    assert!(table.lookup_fully_qualified("t.Dict").is_none());
    assert!(table.lookup_fully_qualified_or_none("typing.Dict").is_some());
}

#[test]
fn test_placeholder_and_namespace_state() {
    let mut table = SymbolTable::new("m");
    table.add_placeholder("m.Later", true);
    assert!(table.get("m.Later").is_some_and(SymbolTableNode::is_placeholder));

    table.mark_incomplete("builtins");
    assert!(table.is_incomplete_namespace("builtins"));
    table.mark_complete("builtins");
    assert!(!table.is_incomplete_namespace("builtins"));

    assert!(table.remove("m.Later").is_some());
    assert!(table.get("m.Later").is_none());
}

#[test]
fn test_pass_loop_stops_when_complete() {
    let mut table = SymbolTable::new("m");
    let report = SemanticPass::new().run(&mut table, |_, pass| {
        if pass < 3 {
            PassStatus::Deferred
        } else {
            PassStatus::Complete
        }
    });
    assert_eq!(
        report,
        PassReport {
            passes: 3,
            status: PassStatus::Complete
        }
    );
    assert!(!table.is_final_iteration());
}

#[test]
fn test_pass_loop_marks_last_pass_final() {
    let mut table = SymbolTable::new("m");
    let mut finals = Vec::new();
    let report = SemanticPass::with_max_passes(3).run(&mut table, |table, _| {
        finals.push(table.is_final_iteration());
        PassStatus::Incomplete
    });
    assert_eq!(finals, [false, false, true]);
    assert_eq!(report.passes, 3);
    assert_eq!(report.status, PassStatus::Incomplete);
}

#[test]
fn test_pass_limit_defaults() {
    assert_eq!(SemanticPass::default().max_passes(), MAX_SEMANAL_PASSES);
    assert_eq!(SemanticPass::with_max_passes(0).max_passes(), 1);
}
