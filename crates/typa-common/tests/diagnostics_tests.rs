use super::*;

#[test]
fn test_format_message_positional_args() {
    let text = format_message("\"{0}\" expects {1}, but {2} given", &["dict", "2 type arguments", "1"]);
    assert_eq!(text, "\"dict\" expects 2 type arguments, but 1 given");
}

#[test]
fn test_format_message_repeated_placeholder() {
    let text = format_message("Use \"{0}\" to bind \"{0}\"", &["T"]);
    assert_eq!(text, "Use \"T\" to bind \"T\"");
}

#[test]
fn test_vec_sink_records_errors_and_notes() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    sink.fail(Provenance::new(3, 4), "bad".to_string(), Some(codes::VALID_TYPE));
    sink.note(Provenance::new(3, 4), "hint".to_string());

    assert_eq!(sink.len(), 2);
    assert!(sink[0].is_error());
    assert_eq!(sink[0].line, 3);
    assert_eq!(sink[0].column, 4);
    assert_eq!(sink[0].code, Some(codes::VALID_TYPE));
    assert_eq!(sink[1].category, DiagnosticCategory::Note);
    assert_eq!(sink[1].code, None);
}

#[test]
fn test_collector_queries() {
    let mut collector = DiagnosticCollector::new();
    assert!(!collector.has_errors());

    collector.note(Provenance::UNKNOWN, "just a note".to_string());
    assert!(!collector.has_errors());

    collector.fail(Provenance::at_line(1), "Name 'tuple' is not defined".to_string(), None);
    assert!(collector.has_errors());
    assert_eq!(collector.error_count(), 1);
    assert!(collector.has_error_containing("tuple"));
    assert!(!collector.has_error_containing("just a note"));
    assert_eq!(collector.messages().len(), 2);

    collector.clear();
    assert!(collector.diagnostics().is_empty());
}

#[test]
fn test_provenance_ignored_by_equality() {
    assert_eq!(Provenance::new(1, 2), Provenance::new(10, 20));
    assert!(Provenance::new(0, 0).is_known());
    assert!(!Provenance::UNKNOWN.is_known());
    assert_eq!(Provenance::new(4, 7).to_string(), "4:7");
    assert_eq!(Provenance::at_line(4).to_string(), "4");
}
