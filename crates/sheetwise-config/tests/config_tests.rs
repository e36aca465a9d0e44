// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Sheetwise configuration system.

use sheetwise_config::diagnostic::ConfigError;
use sheetwise_config::model::{SheetwiseConfig, StorageBackendKind};
use sheetwise_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[app]
name = "cram"
log_level = "debug"

[gemini]
api_key = "g-123"
model = "gemini-2.5-pro"
base_url = "http://localhost:8080/v1beta"
timeout_secs = 30
temperature = 0.2

[storage]
backend = "memory"
database_path = "/tmp/sheetwise-test.db"

[quiz]
question_count = 12
exam_time_limit_secs = 900
weak_threshold = 70

[upload]
max_bytes = 1024

[gallery]
seed_file = "gallery.json"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "cram");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.gemini.api_key.as_deref(), Some("g-123"));
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.timeout_secs, 30);
    assert_eq!(config.storage.backend, StorageBackendKind::Memory);
    assert_eq!(config.quiz.question_count, 12);
    assert_eq!(config.quiz.exam_time_limit_secs, 900);
    assert_eq!(config.quiz.weak_threshold, 70);
    assert_eq!(config.upload.max_bytes, 1024);
    assert_eq!(config.gallery.seed_file.as_deref(), Some("gallery.json"));
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    let defaults = SheetwiseConfig::default();
    assert_eq!(config.app.name, defaults.app.name);
    assert_eq!(config.gemini.model, defaults.gemini.model);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.storage.database_path, defaults.storage.database_path);
}

#[test]
fn unknown_key_reports_suggestion_and_valid_keys() {
    let errors = load_and_validate_str("[gemini]\nmodle = \"x\"\n").expect_err("should fail");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. }
            if key == "modle"
                && suggestion.as_deref() == Some("model")
                && valid_keys.contains("timeout_secs"))
    });
    assert!(found, "expected UnknownKey for `modle`, got: {errors:?}");
}

#[test]
fn invalid_type_is_reported() {
    let errors = load_and_validate_str("[quiz]\nquestion_count = \"ten\"\n").expect_err("should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("question_count"))),
        "got: {errors:?}"
    );
}

#[test]
fn unknown_storage_backend_is_rejected() {
    let result = load_and_validate_str("[storage]\nbackend = \"redis\"\n");
    assert!(result.is_err());
}

#[test]
fn validation_errors_are_collected_not_fail_fast() {
    let toml = r#"
[app]
log_level = "chatty"

[quiz]
question_count = 0
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    let validation_count = errors
        .iter()
        .filter(|e| matches!(e, ConfigError::Validation { .. }))
        .count();
    assert_eq!(validation_count, 2, "got: {errors:?}");
}

#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "name, log_level".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    let help = error.help().expect("help text").to_string();
    assert!(help.contains("did you mean `name`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("naem"));
}

#[test]
fn explicit_path_is_loaded_and_validated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheetwise.toml");
    std::fs::write(&path, "[app]\nnaem = \"x\"\n").unwrap();

    let errors = load_and_validate_path(&path).expect_err("should reject unknown key");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "naem")),
        "got: {errors:?}"
    );

    std::fs::write(&path, "[quiz]\nweak_threshold = 65\n").unwrap();
    let config = load_and_validate_path(&path).expect("valid file should load");
    assert_eq!(config.quiz.weak_threshold, 65);
}

#[test]
fn missing_explicit_file_falls_back_to_defaults() {
    let config = load_and_validate_path(std::path::Path::new("/nonexistent/sheetwise.toml"))
        .expect("missing file is skipped");
    assert_eq!(config.quiz.question_count, 10);
}
