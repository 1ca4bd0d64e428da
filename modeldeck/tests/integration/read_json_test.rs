//! Integration Test: read_json against real files

use std::io::Write;

use modeldeck::{read_json, read_json_as, ReadJsonError};
use serde::Deserialize;
use serde_json::json;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_read_json_successful() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"test": "test"}}"#).unwrap();

    let response = read_json(file.path()).unwrap();

    assert_eq!(response, json!({"test": "test"}));
    assert_ne!(response, serde_json::Value::Null);
}

#[test]
fn test_read_json_returns_any_value_as_is() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[1, "two", null, {{"nested": [true]}}]"#).unwrap();

    let response = read_json(file.path()).unwrap();

    assert_eq!(response, json!([1, "two", null, {"nested": [true]}]));
}

#[test]
fn test_read_json_file_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("notFound.json");

    let err = read_json(&missing).unwrap_err();

    match err {
        ReadJsonError::NotFound { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_read_json_malformed() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"test": "#).unwrap();

    let err = read_json(file.path()).unwrap_err();

    assert!(matches!(err, ReadJsonError::Parse { .. }));
}

#[test]
fn test_read_json_directory_is_io_error() {
    let dir = tempdir().unwrap();

    let err = read_json(dir.path()).unwrap_err();

    assert!(!err.is_not_found());
}

#[test]
fn test_read_json_as_typed() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct ModelRef {
        model_id: u64,
        version_id: u64,
    }

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"model_id": 788, "version_id": 23}}"#).unwrap();

    let model: ModelRef = read_json_as(file.path()).unwrap();

    assert_eq!(
        model,
        ModelRef {
            model_id: 788,
            version_id: 23
        }
    );
}
