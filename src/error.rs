//! Custom error types for the expense tracker
//!
//! Field-level validation failures live in [`ValidationErrors`]; everything
//! around them (configuration, files, scripts, export, terminal) is reported
//! through [`ExpenseError`].

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A filter bound could not be parsed
    #[error("Invalid filter date '{input}': expected YYYY-MM-DD")]
    InvalidRange { input: String },

    /// Malformed line in a session script
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Create a script error for the given 1-based line number
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
