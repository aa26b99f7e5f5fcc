//! Transactions Report
//!
//! A filtered, newest-first transaction list with income and expense totals
//! for everything the filter matched.

use std::io::Write;

use chrono::NaiveDate;
use tabled::Tabled;

use crate::config::Settings;
use crate::display::{format_date, format_money, render_table, truncate};
use crate::engine::{compute_transaction_totals, sort_newest_first, TransactionFilter, TransactionTotals};
use crate::error::FinboardResult;
use crate::models::{Money, Snapshot, Transaction, TransactionId, TransactionKind};

/// A transaction with its category resolved to a name
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub category_name: String,
    pub kind: TransactionKind,
    pub amount: Money,
}

impl TransactionRow {
    pub fn new(transaction: &Transaction, snapshot: &Snapshot) -> Self {
        Self {
            id: transaction.id,
            date: transaction.date,
            description: transaction.description.clone(),
            category_name: snapshot.category_name(transaction.category).to_string(),
            kind: transaction.kind,
            amount: transaction.amount,
        }
    }

    /// Amount with `+` for income and `-` for expenses
    pub fn format_amount(&self, settings: &Settings) -> String {
        match self.kind {
            TransactionKind::Income => format!("+{}", format_money(self.amount, settings)),
            TransactionKind::Expense => format!("-{}", format_money(self.amount, settings)),
        }
    }
}

#[derive(Tabled)]
pub(crate) struct TransactionTableRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionTableRow {
    pub(crate) fn new(row: &TransactionRow, settings: &Settings) -> Self {
        Self {
            date: format_date(row.date, settings),
            description: truncate(&row.description, 40),
            category: row.category_name.clone(),
            kind: row.kind.to_string(),
            amount: row.format_amount(settings),
        }
    }
}

/// Transactions report
#[derive(Debug, Clone)]
pub struct TransactionsReport {
    pub filter: TransactionFilter,
    /// Shown rows, newest first
    pub rows: Vec<TransactionRow>,
    /// Number of transactions the filter matched before any limit
    pub matched: usize,
    /// Totals over every matched transaction
    pub totals: TransactionTotals,
}

impl TransactionsReport {
    /// Generate the report; `limit` caps the listed rows but not the totals
    pub fn generate(snapshot: &Snapshot, filter: TransactionFilter, limit: Option<usize>) -> Self {
        let mut matched = filter.apply(&snapshot.transactions);
        sort_newest_first(&mut matched);

        let totals = compute_transaction_totals(matched.iter().copied());
        let count = matched.len();

        let rows = matched
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|t| TransactionRow::new(t, snapshot))
            .collect();

        Self {
            filter,
            rows,
            matched: count,
            totals,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str("Transactions\n");

        let table_rows = self
            .rows
            .iter()
            .map(|row| TransactionTableRow::new(row, settings))
            .collect();
        output.push_str(&render_table(table_rows, "No transactions found."));
        output.push('\n');

        if self.rows.len() < self.matched {
            output.push_str(&format!(
                "\nShowing {} of {} transactions\n",
                self.rows.len(),
                self.matched
            ));
        }

        output.push_str(&format!(
            "\nIncome: {}   Expenses: {}   Net: {}\n",
            format_money(self.totals.total_income, settings),
            format_money(self.totals.total_expenses, settings),
            format_money(self.totals.net, settings)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["ID", "Date", "Description", "Category", "Type", "Amount"])?;

        for row in &self.rows {
            csv.write_record([
                row.id.get().to_string(),
                row.date.to_string(),
                row.description.clone(),
                row.category_name.clone(),
                row.kind.to_string(),
                row.amount.format_with_symbol(""),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, CategoryKind, UNCATEGORIZED_LABEL};

    fn snapshot() -> Snapshot {
        let on = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        Snapshot::new(
            vec![
                Transaction::new(TransactionId::new(1), on(1, 5), TransactionKind::Income, Money::from_dollars(3000))
                    .with_description("Salary")
                    .with_category(CategoryId::new(1)),
                Transaction::new(TransactionId::new(2), on(1, 9), TransactionKind::Expense, Money::from_cents(4599))
                    .with_description("Groceries, weekly")
                    .with_category(CategoryId::new(2)),
                Transaction::new(TransactionId::new(3), on(2, 1), TransactionKind::Expense, Money::from_dollars(20))
                    .with_description("Cash"),
            ],
            vec![
                Category::new(CategoryId::new(1), "Salary", CategoryKind::Income),
                Category::new(CategoryId::new(2), "Food", CategoryKind::Expense),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_newest_first_with_names() {
        let report = TransactionsReport::generate(&snapshot(), TransactionFilter::new(), None);
        let ids: Vec<i64> = report.rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(report.rows[0].category_name, UNCATEGORIZED_LABEL);
        assert_eq!(report.rows[1].category_name, "Food");
        assert_eq!(report.totals.net, Money::from_cents(300000 - 4599 - 2000));
    }

    #[test]
    fn test_limit_keeps_totals() {
        let report = TransactionsReport::generate(&snapshot(), TransactionFilter::new(), Some(1));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.matched, 3);
        assert_eq!(report.totals.total_income, Money::from_dollars(3000));

        let output = report.format_terminal(&Settings::default());
        assert!(output.contains("Showing 1 of 3 transactions"));
    }

    #[test]
    fn test_filtered_totals() {
        let filter = TransactionFilter::new().kind(TransactionKind::Expense);
        let report = TransactionsReport::generate(&snapshot(), filter, None);
        assert_eq!(report.matched, 2);
        assert_eq!(report.totals.total_income, Money::zero());
        assert_eq!(report.totals.total_expenses, Money::from_cents(6599));
    }

    #[test]
    fn test_format_terminal() {
        let report = TransactionsReport::generate(&snapshot(), TransactionFilter::new(), None);
        let output = report.format_terminal(&Settings::default());
        assert!(output.contains("+$3000.00"));
        assert!(output.contains("-$45.99"));
        assert!(output.contains("Net: $2934.01"));
    }

    #[test]
    fn test_export_csv_quotes_commas() {
        let report = TransactionsReport::generate(&snapshot(), TransactionFilter::new(), None);
        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains("2,2024-01-09,\"Groceries, weekly\",Food,Expense,45.99"));
    }
}
