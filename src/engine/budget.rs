//! Budget consumption and progress
//!
//! Spending against a budget is every expense in the budget's category whose
//! date falls inside the budget's calendar month.

use serde::Serialize;

use crate::models::{Budget, CategoryId, Money, Month, Transaction};

use super::percent::percent_of;

/// How far a budget has been consumed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetProgress {
    /// Allocated minus spent, floored at zero
    pub remaining: Money,
    /// `remaining / allocated * 100`, 0 for a zero allocation
    pub remaining_percent: f64,
    /// `spent / allocated * 100`, 0 for a zero allocation; may exceed 100
    pub spent_percent: f64,
    /// Spent strictly more than allocated
    pub is_over_budget: bool,
}

/// A budget together with what was spent against it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: Money,
    pub progress: BudgetProgress,
}

impl BudgetStatus {
    /// Compute the status of `budget` against `transactions`
    pub fn compute(budget: &Budget, transactions: &[Transaction]) -> Self {
        let spent = compute_budget_consumption(transactions, budget.category, budget.month);
        Self {
            budget: budget.clone(),
            spent,
            progress: compute_budget_progress(budget, spent),
        }
    }
}

/// Sum of expenses in `category` dated within `month`
///
/// `month` may be a [`Month`] or any date inside it. Income and uncategorized
/// transactions never count.
pub fn compute_budget_consumption(
    transactions: &[Transaction],
    category: CategoryId,
    month: impl Into<Month>,
) -> Money {
    let month = month.into();
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == Some(category) && month.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Derive remaining amount and percentages for a budget given its spending
pub fn compute_budget_progress(budget: &Budget, spent: Money) -> BudgetProgress {
    let allocated = budget.amount;
    let remaining = allocated.saturating_remaining(spent);

    let (remaining_percent, spent_percent) = if allocated.is_positive() {
        (percent_of(remaining, allocated), percent_of(spent, allocated))
    } else {
        (0.0, 0.0)
    };

    BudgetProgress {
        remaining,
        remaining_percent,
        spent_percent,
        is_over_budget: spent > allocated,
    }
}
