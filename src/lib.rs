//! finboard - financial summary engine for a personal-finance dashboard
//!
//! This library turns a snapshot of a user's transactions, categories,
//! budgets and savings goals into the derived numbers a dashboard shows:
//! month-over-month changes, savings rate, budget consumption, goal progress
//! and aggregate totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, goals)
//! - `engine`: Pure summary computations
//! - `snapshot`: Loading and normalizing raw API payloads
//! - `storage`: JSON file helpers
//! - `reports`: Terminal and CSV reports
//! - `display`: Formatting helpers
//! - `export`: JSON and YAML summary export
//! - `cli`: Command handlers for the `finboard` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::engine::summarize;
//! use finboard::snapshot::{BundleFileSource, NormalizeMode, SnapshotSource};
//!
//! let snapshot = BundleFileSource::new("snapshot.json", NormalizeMode::Lenient).load()?;
//! let summary = summarize(&snapshot, chrono::Local::now().date_naive());
//! println!("Savings rate: {:.1}%", summary.monthly.savings_rate);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod snapshot;
pub mod storage;

pub use error::{FinboardError, FinboardResult};
