//! Configuration module for the expense tracker
//!
//! - Path resolution (env override, platform config directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
