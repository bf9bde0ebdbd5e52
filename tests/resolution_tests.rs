//! End-to-end resolution through the public facade: a driver loop over the
//! in-memory symbol table, alias definition and use, and option loading.

use std::rc::Rc;
use typa::analyzer::{NoPlugins, TypeAlias};
use typa::types::ClassInfo;
use typa::{
    AnalyzerFlags, DiagnosticCollector, Options, PassStatus, Resolution, SemanticPass, SymbolTable,
    Type, TypeAnalyzer, TypeOfAny, TypeVarScope, analyze_type_alias,
};

fn table() -> SymbolTable {
    let mut table = SymbolTable::with_prelude("m");
    table.import_from("typing", &["List", "Dict", "Optional"]);
    table.add_type_var(typa::analyzer::TypeVarExpr::new("m.T"));
    table
}

fn u(name: &str, args: Vec<Type>) -> Type {
    Type::unbound(name, args)
}

fn resolve(
    table: &SymbolTable,
    options: &Options,
    flags: AnalyzerFlags,
    diags: &mut DiagnosticCollector,
    ty: &Type,
) -> Resolution {
    let mut analyzer = TypeAnalyzer::new(
        table,
        &NoPlugins,
        options,
        diags,
        Rc::new(TypeVarScope::new()),
        flags,
    );
    analyzer.resolve(ty)
}

#[test]
fn test_forward_reference_resolves_on_second_pass() {
    typa::tracing_config::init_tracing();
    let mut table = table();
    table.add_placeholder("m.Node", true);
    let options = Options::default();
    let annotation = u("List", vec![u("Node", Vec::new())]);
    let mut results = Vec::new();

    let report = SemanticPass::new().run(&mut table, |table, pass| {
        let mut diags = DiagnosticCollector::new();
        let resolution = resolve(
            table,
            &options,
            AnalyzerFlags::ALLOW_PLACEHOLDER,
            &mut diags,
            &annotation,
        );
        assert!(!diags.has_errors(), "pass {pass}: {:?}", diags.messages());
        if pass == 1 {
            // The class statement finishes after the annotation was seen.
            table.remove("m.Node");
            table.add_class(ClassInfo::new("m.Node"));
        }
        let status = resolution.status;
        results.push(resolution);
        status
    });

    assert_eq!(report.passes, 2);
    assert_eq!(report.status, PassStatus::Complete);
    assert_eq!(results[0].status, PassStatus::Deferred);
    assert_eq!(results[1].ty.to_string(), "list[Node]");
}

#[test]
fn test_cyclic_reference_is_reported_on_final_pass() {
    let mut table = table();
    table.add_placeholder("m.Loop", true);
    let options = Options::default();
    let mut last = DiagnosticCollector::new();

    let report = SemanticPass::with_max_passes(3).run(&mut table, |table, _| {
        last.clear();
        resolve(
            table,
            &options,
            AnalyzerFlags::ALLOW_PLACEHOLDER,
            &mut last,
            &u("Loop", Vec::new()),
        )
        .status
    });

    assert_eq!(report.passes, 3);
    assert_eq!(report.status, PassStatus::Complete);
    assert_eq!(last.error_count(), 1);
    assert!(last.has_error_containing("Cannot resolve name \"Loop\" (possible cyclic definition)"));
}

#[test]
fn test_alias_definition_then_use() {
    let mut table = table();
    let options = Options::default();
    let mut diags = DiagnosticCollector::new();

    // StrMap = Dict[str, T]
    let rhs = u("Dict", vec![u("str", Vec::new()), u("T", Vec::new())]);
    let defined = analyze_type_alias(
        &rhs,
        &table,
        &NoPlugins,
        &options,
        &mut diags,
        Rc::new(TypeVarScope::new()),
        AnalyzerFlags::default(),
    );
    assert_eq!(defined.status, PassStatus::Complete);
    assert!(defined.aliases_used.contains("typing.Dict"));
    assert_eq!(defined.ty.to_string(), "dict[str, T]");
    table.add_alias(TypeAlias::new("m.StrMap", defined.ty, vec!["T".to_string()]));

    // x: Optional[StrMap[int]]
    let annotation = u("Optional", vec![u("StrMap", vec![u("int", Vec::new())])]);
    let used = resolve(&table, &options, AnalyzerFlags::default(), &mut diags, &annotation);
    assert!(used.is_complete());
    assert_eq!(used.ty.to_string(), "Optional[dict[str, int]]");
    assert!(!diags.has_errors());
}

#[test]
fn test_options_loaded_from_json_drive_strictness() {
    let table = table();
    let text = serde_json::json!({ "disallow_any_generics": true }).to_string();
    let options = Options::from_json_str(&text).expect("valid options");
    assert!(options.disallow_any_generics);

    let mut diags = DiagnosticCollector::new();
    let resolution = resolve(
        &table,
        &options,
        AnalyzerFlags::default(),
        &mut diags,
        &u("Dict", Vec::new()),
    );
    let instance = resolution.ty.as_instance().expect("instance");
    assert!(
        instance
            .args
            .iter()
            .all(|arg| arg.type_of_any() == Some(TypeOfAny::FromError))
    );
    assert!(diags.has_error_containing("Missing type parameters for generic type"));
}

#[test]
fn test_log_format_parsing() {
    use typa::tracing_config::LogFormat;
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}
