//! Budgets Report
//!
//! Every budget with its allocation, spending, what is left, and whether it
//! has been overspent, plus totals across the listed budgets.

use std::io::Write;

use tabled::Tabled;

use crate::config::Settings;
use crate::display::{format_bar, format_money, format_percentage, render_table, separator};
use crate::engine::{compute_aggregate_totals, BudgetStatus};
use crate::error::FinboardResult;
use crate::models::{Budget, BudgetId, CategoryId, Money, Month, Snapshot};

/// One budget, resolved against the snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub budget_id: BudgetId,
    pub category_id: CategoryId,
    pub category_name: String,
    pub month: Month,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
    pub remaining_percent: f64,
    pub spent_percent: f64,
    pub is_over_budget: bool,
}

impl BudgetRow {
    /// Compute the row for a single budget
    pub fn new(budget: &Budget, snapshot: &Snapshot) -> Self {
        let status = BudgetStatus::compute(budget, &snapshot.transactions);
        Self {
            budget_id: budget.id,
            category_id: budget.category,
            category_name: snapshot.category_name(Some(budget.category)).to_string(),
            month: budget.month,
            allocated: budget.amount,
            spent: status.spent,
            remaining: status.progress.remaining,
            remaining_percent: status.progress.remaining_percent,
            spent_percent: status.progress.spent_percent,
            is_over_budget: status.progress.is_over_budget,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_over_budget {
            "Over Budget"
        } else {
            "On Track"
        }
    }

    /// Multi-line detail view
    pub fn format_detail(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Budget {}: {} ({})\n",
            self.budget_id, self.category_name, self.month
        ));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "Allocated:  {}\n",
            format_money(self.allocated, settings)
        ));
        output.push_str(&format!("Spent:      {}\n", format_money(self.spent, settings)));
        output.push_str(&format!(
            "Remaining:  {} ({})\n",
            format_money(self.remaining, settings),
            format_percentage(self.remaining_percent)
        ));
        output.push_str(&format!(
            "Used:       {} {}\n",
            format_bar(self.spent_percent, settings.bar_width),
            format_percentage(self.spent_percent)
        ));
        output.push_str(&format!("Status:     {}\n", self.status_label()));
        output
    }
}

#[derive(Tabled)]
struct BudgetTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Budgets report, optionally restricted to one month
#[derive(Debug, Clone)]
pub struct BudgetsReport {
    pub month: Option<Month>,
    pub rows: Vec<BudgetRow>,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

impl BudgetsReport {
    /// Generate the report for every budget, or only those in `month`
    pub fn generate(snapshot: &Snapshot, month: Option<Month>) -> Self {
        let budgets: Vec<Budget> = snapshot
            .budgets
            .iter()
            .filter(|b| month.map_or(true, |m| b.month == m))
            .cloned()
            .collect();

        let totals = compute_aggregate_totals(&budgets, &[], &snapshot.transactions);
        let rows = budgets.iter().map(|b| BudgetRow::new(b, snapshot)).collect();

        Self {
            month,
            rows,
            total_budget: totals.total_budget,
            total_spent: totals.total_spent,
            total_remaining: totals.total_remaining,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        match self.month {
            Some(month) => output.push_str(&format!("Budgets - {}\n", month)),
            None => output.push_str("Budgets\n"),
        }

        let table_rows = self
            .rows
            .iter()
            .map(|row| BudgetTableRow {
                id: row.budget_id.to_string(),
                month: row.month.to_string(),
                category: row.category_name.clone(),
                allocated: format_money(row.allocated, settings),
                spent: format_money(row.spent, settings),
                remaining: format!(
                    "{} ({})",
                    format_money(row.remaining, settings),
                    format_percentage(row.remaining_percent)
                ),
                progress: format_bar(row.spent_percent, settings.bar_width),
                status: row.status_label().to_string(),
            })
            .collect();
        output.push_str(&render_table(table_rows, "No budgets found."));
        output.push('\n');

        output.push_str(&format!(
            "\nTotal budget: {}   Spent: {}   Remaining: {}\n",
            format_money(self.total_budget, settings),
            format_money(self.total_spent, settings),
            format_money(self.total_remaining, settings)
        ));

        let over = self.over_budget_count();
        if over > 0 {
            output.push_str(&format!("{} budget(s) over budget\n", over));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Budget ID",
            "Month",
            "Category ID",
            "Category",
            "Allocated",
            "Spent",
            "Remaining",
            "Remaining %",
            "Spent %",
            "Over Budget",
        ])?;

        for row in &self.rows {
            csv.write_record([
                row.budget_id.get().to_string(),
                row.month.to_string(),
                row.category_id.get().to_string(),
                row.category_name.clone(),
                row.allocated.format_with_symbol(""),
                row.spent.format_with_symbol(""),
                row.remaining.format_with_symbol(""),
                format!("{:.2}", row.remaining_percent),
                format!("{:.2}", row.spent_percent),
                row.is_over_budget.to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }

    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_over_budget).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryKind, Transaction, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn snapshot() -> Snapshot {
        let on = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        let expense = |id, cat, dollars, date| {
            Transaction::new(
                TransactionId::new(id),
                date,
                TransactionKind::Expense,
                Money::from_dollars(dollars),
            )
            .with_category(CategoryId::new(cat))
        };
        let budget = |id, cat, month, dollars| {
            Budget::new(
                BudgetId::new(id),
                CategoryId::new(cat),
                Month::new(2024, month).unwrap(),
                Money::from_dollars(dollars),
            )
        };

        Snapshot::new(
            vec![
                expense(1, 1, 150, on(1, 10)),
                expense(2, 1, 50, on(1, 31)),
                expense(3, 2, 250, on(1, 20)),
                expense(4, 1, 80, on(2, 29)),
            ],
            vec![
                Category::new(CategoryId::new(1), "Food", CategoryKind::Expense),
                Category::new(CategoryId::new(2), "Fun", CategoryKind::Expense),
            ],
            vec![budget(1, 1, 1, 500), budget(2, 2, 1, 200), budget(3, 1, 2, 100)],
            vec![],
        )
    }

    #[test]
    fn test_all_budgets() {
        let report = BudgetsReport::generate(&snapshot(), None);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.total_budget, Money::from_dollars(800));
        assert_eq!(report.total_spent, Money::from_dollars(530));
        assert_eq!(report.over_budget_count(), 1);

        let food = &report.rows[0];
        assert_eq!(food.category_name, "Food");
        assert_eq!(food.spent, Money::from_dollars(200));
        assert_eq!(food.remaining, Money::from_dollars(300));
        assert_eq!(food.remaining_percent, 60.0);
        assert_eq!(food.status_label(), "On Track");

        let fun = &report.rows[1];
        assert_eq!(fun.remaining, Money::zero());
        assert_eq!(fun.spent_percent, 125.0);
        assert_eq!(fun.status_label(), "Over Budget");
    }

    #[test]
    fn test_month_filter() {
        let report = BudgetsReport::generate(&snapshot(), Month::new(2024, 2));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].spent, Money::from_dollars(80));
        assert_eq!(report.total_remaining, Money::from_dollars(20));
    }

    #[test]
    fn test_format_terminal() {
        let report = BudgetsReport::generate(&snapshot(), None);
        let output = report.format_terminal(&Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("Over Budget"));
        assert!(output.contains("$800.00"));
        assert!(output.contains("1 budget(s) over budget"));
    }

    #[test]
    fn test_format_empty() {
        let report = BudgetsReport::generate(&Snapshot::default(), None);
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No budgets found."));
    }

    #[test]
    fn test_export_csv() {
        let report = BudgetsReport::generate(&snapshot(), None);
        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Budget ID,Month"));
        assert_eq!(lines[2], "2,2024-01,2,Fun,200.00,250.00,0.00,0.00,125.00,true");
    }

    #[test]
    fn test_detail() {
        let report = BudgetsReport::generate(&snapshot(), None);
        let detail = report.rows[0].format_detail(&Settings::default());
        assert!(detail.contains("Food (2024-01)"));
        assert!(detail.contains("Remaining:  $300.00 (60.0%)"));
    }
}
