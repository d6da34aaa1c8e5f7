//! Tracing subscriber setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so while it runs
//! logs go to the log file instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Filter from `RUST_LOG`, else `expense_tracker=<level>`
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={}", settings.log_level)))
}

/// Install the global subscriber
pub fn init(settings: &Settings, paths: &ExpensePaths, target: LogTarget) -> ExpenseResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(settings));

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| ExpenseError::Io(format!("Failed to open log file: {}", e)))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| ExpenseError::Config(format!("Failed to initialize logging: {}", e)))
}
