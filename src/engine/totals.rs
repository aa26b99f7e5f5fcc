//! Whole-snapshot totals for budgets, goals and transactions

use serde::Serialize;

use crate::models::{Budget, Money, SavingsGoal, Transaction};

use super::budget::compute_budget_consumption;

/// Aggregate budget and goal totals
///
/// The two `*_remaining` fields are plain differences and go negative on
/// aggregate overspend or when goals are collectively overfunded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateTotals {
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub total_goal_target: Money,
    pub total_goal_saved: Money,
    pub total_goal_remaining: Money,
}

/// Lifetime income and expense totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionTotals {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub net: Money,
}

/// Sum allocations, spending and goal amounts across the snapshot
///
/// Spending is computed per budget, so a transaction covered by two budgets
/// for the same (category, month) is counted once for each.
pub fn compute_aggregate_totals(
    budgets: &[Budget],
    goals: &[SavingsGoal],
    transactions: &[Transaction],
) -> AggregateTotals {
    let total_budget: Money = budgets.iter().map(|b| b.amount).sum();
    let total_spent: Money = budgets
        .iter()
        .map(|b| compute_budget_consumption(transactions, b.category, b.month))
        .sum();

    let total_goal_target: Money = goals.iter().map(|g| g.target_amount).sum();
    let total_goal_saved: Money = goals.iter().map(|g| g.current_amount).sum();

    AggregateTotals {
        total_budget,
        total_spent,
        total_remaining: total_budget - total_spent,
        total_goal_target,
        total_goal_saved,
        total_goal_remaining: total_goal_target - total_goal_saved,
    }
}

/// Sum every transaction by kind, regardless of date
pub fn compute_transaction_totals<'a, I>(transactions: I) -> TransactionTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (total_income, total_expenses) =
        transactions
            .into_iter()
            .fold((Money::zero(), Money::zero()), |(inc, exp), t| {
                if t.is_income() {
                    (inc + t.amount, exp)
                } else {
                    (inc, exp + t.amount)
                }
            });

    TransactionTotals {
        total_income,
        total_expenses,
        net: total_income - total_expenses,
    }
}
