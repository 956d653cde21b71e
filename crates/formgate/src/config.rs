// File: formgate/src/config.rs
// Purpose: Behavior configuration parsing from formgate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// formgate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormgateConfig {
    #[serde(default)]
    pub behavior: FormBehavior,
}

/// How UI transitions update a form state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormBehavior {
    /// Recompute errors after every value change (default: true)
    #[serde(default = "default_true")]
    pub validate_on_change: bool,

    /// Mark a field touched as soon as its value changes, instead of on blur
    /// (default: false)
    #[serde(default = "default_false")]
    pub touch_on_change: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for FormBehavior {
    fn default() -> Self {
        Self {
            validate_on_change: true,
            touch_on_change: false,
        }
    }
}

impl FormgateConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(?path, "no formgate config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(?path, ?config, "loaded formgate config");
        Ok(config)
    }

    /// Load configuration from the default path (./formgate.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formgate.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: FormgateConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FormgateConfig::default();
        assert!(config.behavior.validate_on_change);
        assert!(!config.behavior.touch_on_change);
    }

    #[test]
    fn test_parse_partial_behavior() {
        let config = FormgateConfig::from_toml_str(
            r#"
            [behavior]
            touch_on_change = true
            "#,
        )
        .unwrap();

        assert!(config.behavior.validate_on_change);
        assert!(config.behavior.touch_on_change);
    }

    #[rstest]
    #[case("[behavior]", true, false)]
    #[case("[behavior]\nvalidate_on_change = false", false, false)]
    #[case("[behavior]\ntouch_on_change = true", true, true)]
    #[case(
        "[behavior]\nvalidate_on_change = false\ntouch_on_change = true",
        false,
        true
    )]
    fn test_behavior_flags(
        #[case] content: &str,
        #[case] validate_on_change: bool,
        #[case] touch_on_change: bool,
    ) {
        let config = FormgateConfig::from_toml_str(content).unwrap();
        assert_eq!(
            config.behavior,
            FormBehavior {
                validate_on_change,
                touch_on_change,
            }
        );
    }

    #[test]
    fn test_blank_is_default() {
        assert_eq!(
            FormgateConfig::from_toml_str("  \n").unwrap(),
            FormgateConfig::default()
        );
    }

    #[test]
    fn test_rejects_wrong_types() {
        let err = FormgateConfig::from_toml_str(
            r#"
            [behavior]
            validate_on_change = "yes"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FormgateConfig::load(dir.path().join("formgate.toml")).unwrap();
        assert_eq!(config, FormgateConfig::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[behavior]\nvalidate_on_change = false").unwrap();

        let config = FormgateConfig::load(file.path()).unwrap();
        assert!(!config.behavior.validate_on_change);
        assert!(!config.behavior.touch_on_change);
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[behavior").unwrap();

        let err = FormgateConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
