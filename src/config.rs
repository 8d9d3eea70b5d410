//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "simple_input=info";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Show and require the email field (defaults to true)
    pub collect_email: Option<bool>,
    /// tracing-subscriber filter directive
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "simple-input", "simple-input")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn collect_email(&self) -> bool {
        self.collect_email.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("simple-input-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.collect_email.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.collect_email());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.collect_email());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"collect_email": false, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert!(!parsed.collect_email());
    }

    #[test]
    fn test_custom_log_filter() {
        let config = FormConfig {
            log_filter: Some("simple_input=debug".to_string()),
            ..Default::default()
        };
        assert_eq!(config.log_filter(), "simple_input=debug");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = temp_config_path("missing");
        let config = FormConfig::load_from(&path).unwrap();
        assert!(config.collect_email.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_config_path("written");
        let config = FormConfig {
            collect_email: Some(false),
            log_filter: Some("warn".to_string()),
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = FormConfig::load_from(&path).unwrap();
        assert_eq!(loaded.collect_email, Some(false));
        assert_eq!(loaded.log_filter.as_deref(), Some("warn"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(FormConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = FormConfig::config_path();
    }
}
