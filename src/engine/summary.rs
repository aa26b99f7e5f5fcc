//! Monthly dashboard summary
//!
//! Compares the month containing the reference date against the month before
//! it, and reports the lifetime balance alongside the balance as it stood when
//! the current month began.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Month, Transaction, TransactionKind};

use super::percent::{percent_change, percent_of, savings_rate};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryData {
    /// Month containing the reference date
    pub current_month: Month,
    /// Month immediately before `current_month`
    pub previous_month: Month,

    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub prev_monthly_income: Money,
    pub prev_monthly_expenses: Money,

    /// Net of every transaction ever recorded
    pub total_balance: Money,
    /// Net of every transaction dated before the current month
    pub prev_total_balance: Money,

    pub balance_change_percent: f64,
    pub income_change_percent: f64,
    pub expenses_change_percent: f64,
    /// May be negative when expenses exceed income
    pub savings_rate: f64,
    /// Percentage-point difference between this month's and last month's
    /// savings rate; 0 unless both months had income
    pub savings_change_percent: f64,
}

/// Sum of amounts of one kind inside one month
fn month_total(transactions: &[Transaction], kind: TransactionKind, month: Month) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind && month.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Compute the dashboard summary as of `reference_date`
pub fn compute_monthly_summary(
    transactions: &[Transaction],
    reference_date: NaiveDate,
) -> SummaryData {
    let current_month = Month::from_date(reference_date);
    let previous_month = current_month.prev();

    let monthly_income = month_total(transactions, TransactionKind::Income, current_month);
    let monthly_expenses = month_total(transactions, TransactionKind::Expense, current_month);
    let prev_monthly_income = month_total(transactions, TransactionKind::Income, previous_month);
    let prev_monthly_expenses = month_total(transactions, TransactionKind::Expense, previous_month);

    let total_balance: Money = transactions.iter().map(Transaction::signed_amount).sum();

    let month_start = current_month.first_day();
    let prev_total_balance: Money = transactions
        .iter()
        .filter(|t| t.date < month_start)
        .map(Transaction::signed_amount)
        .sum();

    let balance_change_percent = if prev_total_balance.is_zero() {
        0.0
    } else {
        percent_of(total_balance - prev_total_balance, prev_total_balance.abs())
    };

    let current_rate = savings_rate(monthly_income, monthly_expenses);
    let savings_change_percent = if !prev_monthly_income.is_zero() && !monthly_income.is_zero() {
        current_rate - savings_rate(prev_monthly_income, prev_monthly_expenses)
    } else {
        0.0
    };

    SummaryData {
        current_month,
        previous_month,
        monthly_income,
        monthly_expenses,
        prev_monthly_income,
        prev_monthly_expenses,
        total_balance,
        prev_total_balance,
        balance_change_percent,
        income_change_percent: percent_change(monthly_income, prev_monthly_income),
        expenses_change_percent: percent_change(monthly_expenses, prev_monthly_expenses),
        savings_rate: current_rate,
        savings_change_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: i64, kind: TransactionKind, dollars: i64, on: NaiveDate) -> Transaction {
        Transaction::new(TransactionId::new(id), on, kind, Money::from_dollars(dollars))
    }

    fn income(id: i64, dollars: i64, on: NaiveDate) -> Transaction {
        txn(id, TransactionKind::Income, dollars, on)
    }

    fn expense(id: i64, dollars: i64, on: NaiveDate) -> Transaction {
        txn(id, TransactionKind::Expense, dollars, on)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_single_month_scenario() {
        let transactions = vec![
            income(1, 1000, date(2024, 1, 5)),
            expense(2, 300, date(2024, 1, 10)),
        ];
        let summary = compute_monthly_summary(&transactions, date(2024, 1, 15));

        assert_eq!(summary.monthly_income, Money::from_dollars(1000));
        assert_eq!(summary.monthly_expenses, Money::from_dollars(300));
        assert_eq!(summary.savings_rate, 70.0);
        assert_eq!(summary.total_balance, Money::from_dollars(700));
        assert_eq!(summary.prev_total_balance, Money::zero());
        assert_eq!(summary.balance_change_percent, 0.0);
        assert_eq!(summary.income_change_percent, 100.0);
        assert_eq!(summary.expenses_change_percent, 100.0);
        assert_eq!(summary.savings_change_percent, 0.0);
    }

    #[test]
    fn test_new_income_reports_hundred_percent() {
        let transactions = vec![income(1, 500, date(2024, 3, 2))];
        let summary = compute_monthly_summary(&transactions, date(2024, 3, 20));
        assert_eq!(summary.prev_monthly_income, Money::zero());
        assert_eq!(summary.monthly_income, Money::from_dollars(500));
        assert_eq!(summary.income_change_percent, 100.0);
    }

    #[test]
    fn test_no_activity_reports_zero_change() {
        let summary = compute_monthly_summary(&[], date(2024, 3, 20));
        assert_eq!(summary.income_change_percent, 0.0);
        assert_eq!(summary.expenses_change_percent, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.total_balance, Money::zero());
    }

    #[test]
    fn test_month_over_month_changes() {
        let transactions = vec![
            income(1, 2000, date(2024, 2, 1)),
            expense(2, 500, date(2024, 2, 29)),
            income(3, 3000, date(2024, 3, 1)),
            expense(4, 1500, date(2024, 3, 31)),
        ];
        let summary = compute_monthly_summary(&transactions, date(2024, 3, 10));

        assert_eq!(summary.prev_monthly_income, Money::from_dollars(2000));
        assert_eq!(summary.prev_monthly_expenses, Money::from_dollars(500));
        assert_eq!(summary.income_change_percent, 50.0);
        assert_eq!(summary.expenses_change_percent, 200.0);
        // 50% this month vs 75% last month
        assert_close(summary.savings_rate, 50.0);
        assert_close(summary.savings_change_percent, -25.0);
        // 1500 before March, 3000 overall
        assert_eq!(summary.prev_total_balance, Money::from_dollars(1500));
        assert_eq!(summary.total_balance, Money::from_dollars(3000));
        assert_eq!(summary.balance_change_percent, 100.0);
    }

    #[test]
    fn test_january_compares_against_previous_december() {
        let transactions = vec![
            income(1, 400, date(2023, 12, 31)),
            income(2, 100, date(2024, 1, 1)),
        ];
        let summary = compute_monthly_summary(&transactions, date(2024, 1, 15));

        assert_eq!(summary.previous_month, Month::new(2023, 12).unwrap());
        assert_eq!(summary.prev_monthly_income, Money::from_dollars(400));
        assert_eq!(summary.monthly_income, Money::from_dollars(100));
        assert_eq!(summary.income_change_percent, -75.0);
    }

    #[test]
    fn test_balance_change_uses_magnitude_of_negative_base() {
        let transactions = vec![
            expense(1, 200, date(2024, 4, 10)),
            income(2, 300, date(2024, 5, 2)),
        ];
        let summary = compute_monthly_summary(&transactions, date(2024, 5, 15));

        assert_eq!(summary.prev_total_balance, Money::from_dollars(-200));
        assert_eq!(summary.total_balance, Money::from_dollars(100));
        assert_eq!(summary.balance_change_percent, 150.0);
    }

    #[test]
    fn test_negative_savings_rate() {
        let transactions = vec![
            income(1, 1000, date(2024, 6, 1)),
            expense(2, 1500, date(2024, 6, 2)),
        ];
        let summary = compute_monthly_summary(&transactions, date(2024, 6, 30));
        assert_eq!(summary.savings_rate, -50.0);
    }

    #[test]
    fn test_future_transactions_count_toward_lifetime_balance() {
        let transactions = vec![income(1, 100, date(2024, 8, 1))];
        let summary = compute_monthly_summary(&transactions, date(2024, 6, 15));
        assert_eq!(summary.total_balance, Money::from_dollars(100));
        assert_eq!(summary.monthly_income, Money::zero());
    }

    #[test]
    fn test_leap_day_is_in_february() {
        let transactions = vec![expense(1, 40, date(2024, 2, 29))];
        let summary = compute_monthly_summary(&transactions, date(2024, 2, 1));
        assert_eq!(summary.monthly_expenses, Money::from_dollars(40));
    }

    #[test]
    fn test_is_idempotent() {
        let transactions = vec![
            income(1, 1000, date(2024, 1, 5)),
            expense(2, 300, date(2024, 1, 10)),
        ];
        let first = compute_monthly_summary(&transactions, date(2024, 1, 15));
        let second = compute_monthly_summary(&transactions, date(2024, 1, 15));
        assert_eq!(first, second);
    }
}
