//! Calculator configuration stored in `calculator.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::Operator;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "calculator.toml";

/// Calculator configuration (TOML).
///
/// Missing fields default to the values of the stock calculator: comma as
/// decimal mark, `0` after clear and `Error` after a failed evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal mark typed by the user and shown on the display.
    pub decimal_separator: char,

    /// Display text after clear and at start-up.
    pub zero_indicator: String,

    /// Display text after an invalid operation.
    pub error_indicator: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            zero_indicator: "0".to_string(),
            error_indicator: "Error".to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<()> {
        let sep = self.decimal_separator;
        if sep.is_ascii_digit() || sep.is_whitespace() {
            return Err(anyhow!("decimal_separator must not be a digit or whitespace"));
        }
        let label = sep.to_string();
        if matches!(label.as_str(), "=" | "C" | "c") || Operator::from_label(&label).is_some() {
            return Err(anyhow!("decimal_separator '{sep}' collides with a button label"));
        }
        if self.zero_indicator.trim().is_empty() {
            return Err(anyhow!("zero_indicator must be non-empty"));
        }
        if self.error_indicator.trim().is_empty() {
            return Err(anyhow!("error_indicator must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CalculatorConfig::default()`.
pub fn load_config(path: &Path) -> Result<CalculatorConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = CalculatorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CalculatorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), separator = %cfg.decimal_separator, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CalculatorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_config;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, CalculatorConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("calculator.toml");
        let cfg = CalculatorConfig {
            decimal_separator: '.',
            zero_indicator: "0".to_string(),
            error_indicator: "E".to_string(),
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let (_temp, path) = temp_config("decimal_separator = \".\"\n");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.decimal_separator, '.');
        assert_eq!(cfg.error_indicator, "Error");
    }

    #[test]
    fn separator_colliding_with_operator_is_invalid() {
        for sep in ['x', '/', '-', '=', 'C', '5', ' '] {
            let cfg = CalculatorConfig {
                decimal_separator: sep,
                ..CalculatorConfig::default()
            };
            assert!(cfg.validate().is_err(), "separator {sep:?} accepted");
        }
    }

    #[test]
    fn empty_indicator_is_invalid() {
        let cfg = CalculatorConfig {
            error_indicator: "  ".to_string(),
            ..CalculatorConfig::default()
        };
        let body = toml::to_string_pretty(&cfg).expect("serialize");
        let (_temp, path) = temp_config(&body);
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("error_indicator"));
    }

    #[test]
    fn wrong_toml_type_is_a_parse_error() {
        let (_temp, path) = temp_config("decimal_separator = 3\n");
        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().starts_with("parse "));
    }
}
