use super::*;
use typa_common::DiagnosticCollector;

fn names(names: &[Option<&str>]) -> Vec<Option<String>> {
    names.iter().map(|name| name.map(str::to_string)).collect()
}

#[test]
fn test_constructor_kinds() {
    assert_eq!(arg_kind_for_constructor("mypy_extensions.Arg"), Some(ArgKind::Pos));
    assert_eq!(arg_kind_for_constructor("mypy_extensions.DefaultArg"), Some(ArgKind::Opt));
    assert_eq!(arg_kind_for_constructor("mypy_extensions.NamedArg"), Some(ArgKind::Named));
    assert_eq!(
        arg_kind_for_constructor("mypy_extensions.DefaultNamedArg"),
        Some(ArgKind::NamedOpt)
    );
    assert_eq!(arg_kind_for_constructor("mypy_extensions.VarArg"), Some(ArgKind::Star));
    assert_eq!(arg_kind_for_constructor("mypy_extensions.KwArg"), Some(ArgKind::Star2));
    assert_eq!(arg_kind_for_constructor("builtins.int"), None);
}

#[test]
fn test_duplicate_names_reported_once() {
    let mut diags = DiagnosticCollector::new();
    check_arg_names(
        &names(&[Some("a"), None, Some("a"), Some("b"), Some("b")]),
        "Callable",
        &mut diags,
        Provenance::at_line(3),
    );
    assert_eq!(diags.error_count(), 1);
    assert!(diags.has_error_containing("Duplicate argument \"a\" in Callable"));
}

#[test]
fn test_unnamed_arguments_never_collide() {
    let mut diags = DiagnosticCollector::new();
    check_arg_names(&names(&[None, None, Some("x")]), "Callable", &mut diags, Provenance::UNKNOWN);
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn test_well_ordered_kinds_pass() {
    let mut diags = DiagnosticCollector::new();
    check_arg_kinds(
        &[
            ArgKind::Pos,
            ArgKind::Opt,
            ArgKind::Star,
            ArgKind::Named,
            ArgKind::NamedOpt,
            ArgKind::Star2,
        ],
        &mut diags,
        Provenance::UNKNOWN,
    );
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn test_out_of_order_kinds() {
    let cases: &[(&[ArgKind], &str)] = &[
        (&[ArgKind::Opt, ArgKind::Pos], messages::REQUIRED_AFTER_OTHERS),
        (&[ArgKind::Star, ArgKind::Pos], messages::REQUIRED_AFTER_OTHERS),
        (&[ArgKind::Named, ArgKind::Opt], messages::DEFAULT_AFTER_NAMED),
        (&[ArgKind::Star, ArgKind::Star], messages::VAR_ARGS_AFTER_NAMED),
        (&[ArgKind::Named, ArgKind::Star], messages::VAR_ARGS_AFTER_NAMED),
        (&[ArgKind::Star2, ArgKind::Named], messages::KWARGS_MUST_BE_LAST),
        (&[ArgKind::Star2, ArgKind::Star2], messages::ONLY_ONE_KWARGS),
    ];
    for (kinds, expected) in cases {
        let mut diags = DiagnosticCollector::new();
        check_arg_kinds(kinds, &mut diags, Provenance::UNKNOWN);
        assert_eq!(diags.messages(), [*expected], "{kinds:?}");
    }
}

#[test]
fn test_only_first_ordering_error_is_reported() {
    let mut diags = DiagnosticCollector::new();
    check_arg_kinds(
        &[ArgKind::Star2, ArgKind::Pos, ArgKind::Opt, ArgKind::Star2],
        &mut diags,
        Provenance::UNKNOWN,
    );
    assert_eq!(diags.error_count(), 1);
    assert!(diags.has_error_containing("Required positional args may not appear"));
}
