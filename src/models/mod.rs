//! Core data models for finboard
//!
//! This module contains the data structures the summaries are computed from:
//! transactions, categories, budgets, savings goals, and the snapshot that
//! bundles them.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;
pub mod snapshot;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, CategoryKind};
pub use goal::SavingsGoal;
pub use ids::{BudgetId, CategoryId, GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use snapshot::{Snapshot, UNCATEGORIZED_LABEL};
pub use transaction::{Transaction, TransactionKind};
