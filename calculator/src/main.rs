//! Button-driven calculator.
//!
//! Each argument or script token is the label of one calculator button
//! (`0`-`9`, the decimal separator, `+ - x ÷`, `=`, `C`). The display text is
//! printed to stdout; diagnostics go to stderr via `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calculator::controller::{Calculator, View};
use calculator::exit_codes;
use calculator::io::config::{CalculatorConfig, DEFAULT_CONFIG_FILE, load_config, write_config};
use calculator::io::script::run_script;
use calculator::logging;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "calculator",
    version,
    about = "Button-driven calculator with left-to-right evaluation"
)]
struct Cli {
    /// Path to the TOML config file. Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Press the given buttons in order and print the final display.
    Press {
        /// Print a JSON snapshot of the calculator state instead.
        #[arg(long)]
        json: bool,
        /// Button labels, e.g. `1 + 2 =`.
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Read button labels from stdin, one line at a time.
    Repl,
    /// Run a script file of button labels, printing the display per line.
    Run {
        /// Script path.
        path: PathBuf,
    },
    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Press { json, labels } => cmd_press(&cli.config, &labels, json),
        Command::Repl => cmd_repl(&cli.config),
        Command::Run { path } => cmd_run(&cli.config, &path),
        Command::InitConfig { force } => cmd_init_config(&cli.config, force),
    }
}

fn cmd_press(config_path: &Path, labels: &[String], json: bool) -> Result<i32> {
    let mut calc = Calculator::new(&load_config(config_path)?);
    calc.press_all(labels);
    if json {
        let payload = serde_json::to_string_pretty(&calc.snapshot()).context("serialize snapshot")?;
        println!("{payload}");
    } else {
        println!("{}", calc.display());
    }
    if calc.view() == View::Error {
        return Ok(exit_codes::DISPLAY_ERROR);
    }
    Ok(exit_codes::OK)
}

fn cmd_repl(config_path: &Path) -> Result<i32> {
    let mut calc = Calculator::new(&load_config(config_path)?);
    let stdin = io::stdin();
    let summary = run_script(&mut calc, stdin.lock(), io::stdout().lock())?;
    info!(lines = summary.lines, errors = summary.errors, "repl finished");
    Ok(exit_codes::OK)
}

fn cmd_run(config_path: &Path, path: &Path) -> Result<i32> {
    let mut calc = Calculator::new(&load_config(config_path)?);
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let summary = run_script(&mut calc, BufReader::new(file), io::stdout().lock())?;
    info!(lines = summary.lines, errors = summary.errors, "script finished");
    Ok(exit_codes::OK)
}

fn cmd_init_config(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        info!(path = %config_path.display(), "config exists, leaving it untouched");
        return Ok(exit_codes::OK);
    }
    write_config(config_path, &CalculatorConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("{}", config_path.display());
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_press_with_operator_labels() {
        let cli = Cli::parse_from(["calculator", "press", "5", "-", "2", "="]);
        match cli.command {
            Command::Press { json, labels } => {
                assert!(!json);
                assert_eq!(labels, vec!["5", "-", "2", "="]);
            }
            _ => panic!("expected press"),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_press_flags_after_labels() {
        let cli = Cli::parse_from([
            "calculator",
            "press",
            "1",
            "-",
            "2",
            "--json",
            "--config",
            "x.toml",
        ]);
        match cli.command {
            Command::Press { json, labels } => {
                assert!(json);
                assert_eq!(labels, vec!["1", "-", "2"]);
            }
            _ => panic!("expected press"),
        }
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn parse_press_rejects_unknown_flag() {
        let result = Cli::try_parse_from(["calculator", "press", "1", "--jsn"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_init_config_force() {
        let cli = Cli::parse_from(["calculator", "init-config", "--force"]);
        assert!(matches!(cli.command, Command::InitConfig { force: true }));
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["calculator", "repl", "--config", "other.toml"]);
        assert!(matches!(cli.command, Command::Repl));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
