use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let options = Options::default();
    assert!(!options.disallow_any_generics);
    assert!(!options.disallow_any_explicit);
    assert_eq!(options.python_version, (3, 8));
    assert!(!options.is_python2());
}

#[test]
fn test_partial_json_uses_defaults() {
    let options = Options::from_json_str(r#"{ "disallow_any_generics": true }"#)
        .expect("valid options");
    assert!(options.disallow_any_generics);
    assert!(!options.disallow_any_explicit);
    assert_eq!(options.python_version, (3, 8));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let options = Options::from_json_str(r#"{ "python_version": [2, 7], "strict": true }"#)
        .expect("valid options");
    assert!(options.is_python2());
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = Options::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().contains("invalid typa options JSON"));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "disallow_any_explicit": true }}"#).expect("write options");

    let options = Options::from_path(file.path()).expect("readable options");
    assert!(options.disallow_any_explicit);
}

#[test]
fn test_from_missing_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.json");
    let err = Options::from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("failed to read options file"));
}
