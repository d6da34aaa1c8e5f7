//! Expense Tracker - record expenses, filter them by date and total them
//!
//! This library provides the core of the `expenses` terminal application:
//! validated entry of expense records, an inclusive date range filter over
//! them and the total of whatever the filter currently shows.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense, money, date range)
//! - `storage`: In-memory expense store and atomic file helpers
//! - `services`: Validation, filtering, totals and the session tying them together
//! - `export`: CSV, JSON and YAML snapshots of the current view
//! - `display`: Text formatting for CLI output
//! - `cli`: Script runner and command handlers
//! - `tui`: Interactive terminal form
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::services::{ExpenseCandidate, ExpenseSession, FixedClock};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut session = ExpenseSession::with_clock(FixedClock(today));
//! session
//!     .submit(&ExpenseCandidate::new("Coffee", "4.50", "2024-01-05"))
//!     .unwrap();
//! assert_eq!(session.total().to_string(), "4.50");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
