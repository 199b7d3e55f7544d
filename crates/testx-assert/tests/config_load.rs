use std::fs;

use tempfile::tempdir;
use testx_assert::{TestConfig, TestxError};

#[test]
fn missing_fields_take_defaults() -> Result<(), TestxError> {
    let config = TestConfig::from_json_slice(b"{}")?;
    assert_eq!(config, TestConfig::default());
    assert!(!config.short);
    assert_eq!(config.delta, 1e-9);
    Ok(())
}

#[test]
fn fields_are_decoded() -> Result<(), TestxError> {
    let config = TestConfig::from_json_slice(br#"{"short": true, "delta": 0.25}"#)?;
    assert!(config.short);
    assert_eq!(config.delta, 0.25);
    Ok(())
}

#[test]
fn negative_delta_is_rejected() {
    let err = TestConfig::from_json_slice(br#"{"delta": -1.0}"#).unwrap_err();
    assert_eq!(err.code(), "invalid-delta");
    assert!(matches!(err, TestxError::Config(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = TestConfig::from_json_slice(b"{short: yes}").unwrap_err();
    assert_eq!(err.code(), "decode");

    let err = TestConfig::from_json_slice(br#"{"shrot": true}"#).unwrap_err();
    assert_eq!(err.code(), "decode");
}

#[test]
fn loads_from_disk() -> Result<(), TestxError> {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("testx.json");
    fs::write(&path, br#"{"short": true}"#).expect("write config");

    let config = TestConfig::load(&path)?;
    assert_eq!(config, TestConfig::short_mode());
    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = TestConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), "io");
    assert_eq!(
        err.info().context.get("path"),
        Some(&path.display().to_string())
    );
}
