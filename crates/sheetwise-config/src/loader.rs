// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./sheetwise.toml` > `~/.config/sheetwise/sheetwise.toml`
//! > `/etc/sheetwise/sheetwise.toml` with environment variable overrides via the
//! `SHEETWISE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SheetwiseConfig;

/// Top-level sections, used to map `SHEETWISE_<SECTION>_<KEY>` onto `section.key`.
const SECTIONS: &[&str] = &["app", "gemini", "storage", "quiz", "upload", "gallery"];

/// System-wide config file path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/sheetwise/sheetwise.toml";

/// Local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sheetwise.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sheetwise/sheetwise.toml` (system-wide)
/// 3. `~/.config/sheetwise/sheetwise.toml` (user XDG config)
/// 4. `./sheetwise.toml` (local directory)
/// 5. `SHEETWISE_*` environment variables
pub fn load_config() -> Result<SheetwiseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SheetwiseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SheetwiseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SheetwiseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SheetwiseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SheetwiseConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/sheetwise/sheetwise.toml`, when a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("sheetwise").join("sheetwise.toml"))
}

/// Create the environment variable provider with explicit section-to-dot mapping.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `SHEETWISE_STORAGE_DATABASE_PATH` maps to `storage.database_path`, not
/// `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("SHEETWISE_").map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_first_underscore_only() {
        assert_eq!(map_env_key("storage_database_path"), "storage.database_path");
        assert_eq!(map_env_key("gemini_api_key"), "gemini.api_key");
        assert_eq!(
            map_env_key("quiz_exam_time_limit_secs"),
            "quiz.exam_time_limit_secs"
        );
        assert_eq!(map_env_key("unrelated"), "unrelated");
    }

    #[test]
    fn env_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[quiz]\nquestion_count = 8\n[gemini]\nmodel = \"from-file\"\n",
            )?;
            jail.set_env("SHEETWISE_GEMINI_MODEL", "from-env");
            let config = load_config_from_path(Path::new("custom.toml")).expect("should load");
            assert_eq!(config.quiz.question_count, 8);
            assert_eq!(config.gemini.model, "from-env");
            Ok(())
        });
    }
}
