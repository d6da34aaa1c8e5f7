//! CLI command handlers
//!
//! This module bridges the clap argument parsing in `main.rs` with the
//! session and script runner.

pub mod script;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{parse_date, ExpenseSession, FixedClock, SystemClock};

pub use script::{parse_line, tokenize, ScriptCommand, ScriptReport, ScriptRunner};

/// Parse a `--today` override
pub fn parse_today(input: &str) -> ExpenseResult<NaiveDate> {
    parse_date(input).ok_or_else(|| {
        ExpenseError::Config(format!(
            "Invalid --today date '{}': expected YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Run a script from `source` (a file, or stdin for `None` / `-`)
///
/// Output goes to `out`. `today` pins the date used for the
/// not-in-the-future check.
pub fn handle_run_command<W: Write>(
    settings: &Settings,
    paths: &ExpensePaths,
    source: Option<&Path>,
    today: Option<NaiveDate>,
    out: &mut W,
) -> ExpenseResult<ScriptReport> {
    match source.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                ExpenseError::Io(format!("Failed to open script {}: {}", path.display(), e))
            })?;
            run_with_clock(settings, paths, BufReader::new(file), today, out)
        }
        None => {
            let stdin = io::stdin();
            run_with_clock(settings, paths, stdin.lock(), today, out)
        }
    }
}

fn run_with_clock<R: io::BufRead, W: Write>(
    settings: &Settings,
    paths: &ExpensePaths,
    reader: R,
    today: Option<NaiveDate>,
    out: &mut W,
) -> ExpenseResult<ScriptReport> {
    match today {
        Some(date) => {
            ScriptRunner::new(ExpenseSession::with_clock(FixedClock(date)), settings, paths)
                .run(reader, out)
        }
        None => ScriptRunner::new(ExpenseSession::with_clock(SystemClock), settings, paths)
            .run(reader, out),
    }
}

/// Print configuration and resolved paths
pub fn handle_config_command<W: Write>(
    settings: &Settings,
    paths: &ExpensePaths,
    out: &mut W,
) -> ExpenseResult<()> {
    writeln!(out, "Expense Tracker Configuration")?;
    writeln!(out, "=============================")?;
    writeln!(out, "Base directory:   {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out, "Log file:         {}", paths.log_file().display())?;
    writeln!(out, "Export directory: {}", paths.export_dir().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol: {}", settings.currency_symbol)?;
    writeln!(out, "  Date format:     {}", settings.date_format)?;
    writeln!(out, "  Log level:       {}", settings.log_level)?;
    writeln!(out, "  Tick rate:       {} ms", settings.tick_rate_ms)?;
    writeln!(out, "  Export format:   {}", settings.default_export_format)?;
    Ok(())
}

/// Write the settings file and create the data directories
pub fn handle_init_command<W: Write>(
    settings: &Settings,
    paths: &ExpensePaths,
    out: &mut W,
) -> ExpenseResult<PathBuf> {
    paths.ensure_directories()?;
    settings.save(paths)?;
    writeln!(out, "Initialized expense tracker at: {}", paths.base_dir().display())?;
    Ok(paths.settings_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_today() {
        assert_eq!(
            parse_today("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_today("June 1st").is_err());
    }

    #[test]
    fn test_run_script_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let script = temp_dir.path().join("session.txt");
        std::fs::write(&script, "add Coffee 4.50 2024-01-05\ntotal\n").unwrap();

        let mut out = Vec::new();
        let report = handle_run_command(
            &Settings::default(),
            &paths,
            Some(script.as_path()),
            NaiveDate::from_ymd_opt(2024, 6, 1),
            &mut out,
        )
        .unwrap();

        assert_eq!(report.accepted, 1);
        assert!(String::from_utf8(out).unwrap().contains("Total Expense: Rs 4.50"));
    }

    #[test]
    fn test_missing_script_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut out = Vec::new();
        let err = handle_run_command(
            &Settings::default(),
            &paths,
            Some(temp_dir.path().join("nope.txt").as_path()),
            None,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_init_writes_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(!paths.is_initialized());

        let mut out = Vec::new();
        handle_init_command(&Settings::default(), &paths, &mut out).unwrap();
        assert!(paths.is_initialized());
        assert!(paths.export_dir().is_dir());
    }

    #[test]
    fn test_config_lists_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut out = Vec::new();
        handle_config_command(&Settings::default(), &paths, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("config.json"));
        assert!(text.contains("Currency symbol: Rs"));
    }
}
