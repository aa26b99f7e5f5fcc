//! Financial summary engine
//!
//! Pure functions from a [`Snapshot`] (plus a reference date) to the numbers
//! the dashboard, budgets, goals and transactions views display. Nothing here
//! performs I/O, reads ambient state or mutates its inputs, so any computation
//! may run on any thread at any time and return the same answer for the same
//! arguments.
//!
//! Inputs are assumed well-formed: non-negative amounts and valid dates.
//! Producing such input from raw API payloads is the job of
//! [`crate::snapshot`].

pub mod budget;
pub mod goal;
pub mod percent;
pub mod summary;
pub mod totals;
pub mod transactions;

pub use budget::{compute_budget_consumption, compute_budget_progress, BudgetProgress, BudgetStatus};
pub use goal::{
    compute_goal_overview, compute_goal_progress, GoalOverview, GoalProgress, GoalState, GoalStatus,
};
pub use percent::{percent_change, savings_rate};
pub use summary::{compute_monthly_summary, SummaryData};
pub use totals::{
    compute_aggregate_totals, compute_transaction_totals, AggregateTotals, TransactionTotals,
};
pub use transactions::{recent_transactions, sort_newest_first, TransactionFilter};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Snapshot;

/// Everything derived from one snapshot at one reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotSummary {
    pub reference_date: NaiveDate,
    pub monthly: SummaryData,
    pub budgets: Vec<BudgetStatus>,
    pub goals: Vec<GoalStatus>,
    pub totals: AggregateTotals,
    pub goal_overview: GoalOverview,
    pub transaction_totals: TransactionTotals,
}

/// Derive every summary for `snapshot` as of `reference_date`
pub fn summarize(snapshot: &Snapshot, reference_date: NaiveDate) -> SnapshotSummary {
    log::debug!(
        "Summarizing {} transactions, {} budgets, {} goals as of {}",
        snapshot.transactions.len(),
        snapshot.budgets.len(),
        snapshot.goals.len(),
        reference_date
    );

    let transactions = &snapshot.transactions;

    SnapshotSummary {
        reference_date,
        monthly: compute_monthly_summary(transactions, reference_date),
        budgets: snapshot
            .budgets
            .iter()
            .map(|b| BudgetStatus::compute(b, transactions))
            .collect(),
        goals: snapshot
            .goals
            .iter()
            .map(|g| GoalStatus::compute(g, reference_date))
            .collect(),
        totals: compute_aggregate_totals(&snapshot.budgets, &snapshot.goals, transactions),
        goal_overview: compute_goal_overview(&snapshot.goals),
        transaction_totals: compute_transaction_totals(transactions),
    }
}
