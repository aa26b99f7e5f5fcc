//! Reports for finboard
//!
//! Each report is generated from a [`Snapshot`](crate::models::Snapshot),
//! formats itself for the terminal, and exports its rows as CSV:
//! - Dashboard: this month at a glance
//! - Budgets: allocation, spending and status per budget
//! - Goals: progress toward every savings goal
//! - Transactions: filtered listing with totals

pub mod budgets;
pub mod dashboard;
pub mod goals;
pub mod transactions;

pub use budgets::{BudgetRow, BudgetsReport};
pub use dashboard::DashboardReport;
pub use goals::{GoalRow, GoalsReport};
pub use transactions::{TransactionRow, TransactionsReport};
