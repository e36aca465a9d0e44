// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty paths, sane ranges and well-formed URLs.

use crate::diagnostic::ConfigError;
use crate::model::{SheetwiseConfig, StorageBackendKind};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SheetwiseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.app.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` must be one of: {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.storage.backend == StorageBackendKind::Sqlite
        && config.storage.database_path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    let base_url = config.gemini.base_url.trim();
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        errors.push(ConfigError::Validation {
            message: format!("gemini.base_url `{base_url}` must be an http(s) URL"),
        });
    }

    if config.gemini.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.timeout_secs must be at least 1".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.gemini.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "gemini.temperature must be between 0.0 and 2.0, got {}",
                config.gemini.temperature
            ),
        });
    }

    if config.quiz.question_count == 0 {
        errors.push(ConfigError::Validation {
            message: "quiz.question_count must be at least 1".to_string(),
        });
    }

    if config.quiz.exam_time_limit_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "quiz.exam_time_limit_secs must be at least 1".to_string(),
        });
    }

    if config.quiz.weak_threshold > 100 {
        errors.push(ConfigError::Validation {
            message: format!(
                "quiz.weak_threshold must be between 0 and 100, got {}",
                config.quiz.weak_threshold
            ),
        });
    }

    if config.upload.max_bytes == 0 {
        errors.push(ConfigError::Validation {
            message: "upload.max_bytes must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = SheetwiseConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_for_sqlite_only() {
        let mut config = SheetwiseConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "database_path"));

        config.storage.backend = StorageBackendKind::Memory;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_log_level_fails_validation() {
        let mut config = SheetwiseConfig::default();
        config.app.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "app.log_level"));
    }

    #[test]
    fn out_of_range_quiz_settings_fail() {
        let mut config = SheetwiseConfig::default();
        config.quiz.question_count = 0;
        config.quiz.weak_threshold = 101;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_error(&errors, "question_count"));
        assert!(has_error(&errors, "weak_threshold"));
    }

    #[test]
    fn non_http_base_url_fails() {
        let mut config = SheetwiseConfig::default();
        config.gemini.base_url = "ftp://example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "gemini.base_url"));
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = SheetwiseConfig::default();
        config.app.log_level = "DEBUG".to_string();
        config.gemini.base_url = "http://127.0.0.1:9000/v1beta".to_string();
        config.gemini.temperature = 1.0;
        config.storage.database_path = "/tmp/test.db".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
