//! Test-only helpers for building calculators and config files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::controller::Calculator;
use crate::io::config::{CalculatorConfig, DEFAULT_CONFIG_FILE};

/// Config identical to the default except for the decimal separator.
pub fn config_with_separator(separator: char) -> CalculatorConfig {
    CalculatorConfig {
        decimal_separator: separator,
        ..CalculatorConfig::default()
    }
}

/// Fresh calculator using `separator` as decimal mark.
pub fn calculator_with_separator(separator: char) -> Calculator {
    Calculator::new(&config_with_separator(separator))
}

/// Temp directory holding `calculator.toml` with the given raw contents.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, contents).expect("write config");
    (dir, path)
}
