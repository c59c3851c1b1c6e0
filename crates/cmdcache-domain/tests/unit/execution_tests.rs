//! Unit tests for execution results and their encodings

use cmdcache_domain::{ExecutionResult, ResultEncoding};

fn samples() -> Vec<ExecutionResult> {
    vec![
        ExecutionResult::new(0, "hi\n", ""),
        ExecutionResult::new(45, "", "no new data"),
        ExecutionResult::new(-9, "partial", "killed"),
        ExecutionResult::new(0, "quotes ' \" and\ttabs\nand\r\nnewlines", "ünïcödé ✓"),
        ExecutionResult::new(1, "", ""),
    ]
}

#[test]
fn test_json_round_trip() {
    for result in samples() {
        let blob = ResultEncoding::Json.encode(&result).unwrap();
        assert_eq!(ResultEncoding::Json.decode(&blob).unwrap(), result);
    }
}

#[test]
fn test_toml_round_trip() {
    for result in samples() {
        let blob = ResultEncoding::Toml.encode(&result).unwrap();
        assert_eq!(ResultEncoding::Toml.decode(&blob).unwrap(), result);
    }
}

#[test]
fn test_json_blob_shape() {
    let blob = ResultEncoding::Json
        .encode(&ExecutionResult::new(0, "hi", ""))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();

    assert_eq!(value["exit_code"], 0);
    assert_eq!(value["stdout"], "hi");
    assert_eq!(value["stderr"], "");
}

#[test]
fn test_decode_rejects_foreign_blob() {
    assert!(ResultEncoding::Json.decode("not json at all").is_err());
    assert!(ResultEncoding::Json.decode(r#"{"stdout":"x"}"#).is_err());
    assert!(ResultEncoding::Toml.decode("= broken").is_err());
}

#[test]
fn test_encodings_are_not_interchangeable() {
    let result = ExecutionResult::new(0, "hi", "");
    let blob = ResultEncoding::Toml.encode(&result).unwrap();
    assert!(ResultEncoding::Json.decode(&blob).is_err());
}

#[test]
fn test_is_success() {
    assert!(ExecutionResult::new(0, "", "").is_success());
    assert!(!ExecutionResult::new(45, "", "").is_success());
}

#[test]
fn test_default_encoding_is_json() {
    assert_eq!(ResultEncoding::default(), ResultEncoding::Json);
}
