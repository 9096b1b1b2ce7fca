// File: src/config.rs
// Purpose: Configuration parsing from gs1forms.toml

use crate::label::{ZplOptions, DEFAULT_LABEL_WIDTH};
use crate::messages::Lang;
use crate::validator::FormValidator;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gs1forms.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub label: LabelConfig,
}

/// Message language
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MessagesConfig {
    #[serde(default)]
    pub lang: Lang,
}

/// Validation switches
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject expiry dates before today (off: shape check only)
    #[serde(default = "default_false")]
    pub reject_expired: bool,
}

/// Label rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelConfig {
    /// ZPL print width in dots
    #[serde(default = "default_label_width")]
    pub width: u32,
}

fn default_false() -> bool {
    false
}

fn default_label_width() -> u32 {
    DEFAULT_LABEL_WIDTH
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            width: default_label_width(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if config.label.width == 0 {
            anyhow::bail!("Invalid config file {:?}: label.width must be positive", path);
        }

        Ok(config)
    }

    /// Load configuration from a file that must exist
    pub fn load_required(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        Self::load(path)
    }

    /// Load configuration from default path (./gs1forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Validator for this configuration; `today` is used only when
    /// `validation.reject_expired` is set
    pub fn validator(&self, today: NaiveDate) -> FormValidator {
        let validator = FormValidator::new(self.messages.lang);
        if self.validation.reject_expired {
            validator.with_expiry_check(today)
        } else {
            validator
        }
    }

    pub fn zpl_options(&self) -> ZplOptions {
        ZplOptions {
            width: self.label.width,
            lang: self.messages.lang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.messages.lang, Lang::En);
        assert!(!config.validation.reject_expired);
        assert_eq!(config.label.width, 800);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_required_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_required(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[label]\nwidth = 1000").unwrap();
        assert_eq!(Config::load_required(file.path()).unwrap().label.width, 1000);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[messages]\nlang = \"ES\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.messages.lang, Lang::Es);
        assert_eq!(config.label.width, 800);
        assert_eq!(config.zpl_options().lang, Lang::Es);
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[messages]\nlang = \"EN\"\n\n[validation]\nreject_expired = true\n\n[label]\nwidth = 1200"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.validation.reject_expired);
        assert_eq!(config.zpl_options().width, 1200);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[messages]\nlang = \"FR\"").unwrap();
        assert!(Config::load(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[label]\nwidth = 0").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_validator_honours_reject_expired() {
        use crate::{FormKind, FormSnapshot};

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let past = FormSnapshot::new()
            .with("gtin", "12345678901234")
            .with("fecha", "01/01/2024")
            .with("cantidad", "1");

        let mut config = Config::default();
        assert!(config.validator(today).check(FormKind::Item, &past).is_ok());

        config.validation.reject_expired = true;
        assert!(config.validator(today).check(FormKind::Item, &past).is_err());
    }
}
