//! Dashboard Report
//!
//! The one-screen overview: this month against last month, the most recent
//! transactions, this month's budgets and every savings goal.

use std::io::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{
    format_bar, format_change, format_date, format_header, format_money, format_percentage,
    render_table, separator, truncate,
};
use crate::engine::{recent_transactions, summarize, AggregateTotals, GoalOverview, SummaryData};
use crate::error::FinboardResult;
use crate::models::Snapshot;

use super::budgets::BudgetRow;
use super::goals::GoalRow;
use super::transactions::{TransactionRow, TransactionTableRow};

const WIDTH: usize = 72;

/// Dashboard as of a reference date
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub summary: SummaryData,
    pub recent: Vec<TransactionRow>,
    /// Budgets for the reference month only
    pub budgets: Vec<BudgetRow>,
    pub goals: Vec<GoalRow>,
    pub totals: AggregateTotals,
    pub goal_overview: GoalOverview,
}

impl DashboardReport {
    pub fn generate(snapshot: &Snapshot, as_of: NaiveDate, recent_limit: usize) -> Self {
        let summary = summarize(snapshot, as_of);
        let month = summary.monthly.current_month;

        Self {
            as_of,
            summary: summary.monthly,
            recent: recent_transactions(&snapshot.transactions, recent_limit)
                .into_iter()
                .map(|t| TransactionRow::new(t, snapshot))
                .collect(),
            budgets: snapshot
                .budgets
                .iter()
                .filter(|b| b.month == month)
                .map(|b| BudgetRow::new(b, snapshot))
                .collect(),
            goals: snapshot.goals.iter().map(|g| GoalRow::new(g, as_of)).collect(),
            totals: summary.totals,
            goal_overview: summary.goal_overview,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let s = &self.summary;
        let mut output = String::new();

        output.push_str(&format_header(
            &format!(
                "Dashboard - {} (as of {})",
                s.current_month,
                format_date(self.as_of, settings)
            ),
            WIDTH,
        ));

        output.push_str(&format!(
            "{:<18} {:>14}  {}\n",
            "Total balance",
            format_money(s.total_balance, settings),
            format_change(s.balance_change_percent)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}  {}\n",
            "Monthly income",
            format_money(s.monthly_income, settings),
            format_change(s.income_change_percent)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}  {}\n",
            "Monthly expenses",
            format_money(s.monthly_expenses, settings),
            format_change(s.expenses_change_percent)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}  {}\n",
            "Savings rate",
            format_percentage(s.savings_rate),
            format_change(s.savings_change_percent)
        ));
        output.push_str(&format!("Compared with {}\n", s.previous_month));

        output.push_str(&format!("\nRecent transactions\n{}\n", separator(WIDTH)));
        let rows = self
            .recent
            .iter()
            .map(|row| TransactionTableRow::new(row, settings))
            .collect();
        output.push_str(&render_table(rows, "No transactions yet."));
        output.push('\n');

        output.push_str(&format!("\nBudgets for {}\n{}\n", s.current_month, separator(WIDTH)));
        if self.budgets.is_empty() {
            output.push_str("No budgets for this month.\n");
        }
        for row in &self.budgets {
            output.push_str(&format!(
                "{:<20} {} {:>7}  {} of {}{}\n",
                truncate(&row.category_name, 20),
                format_bar(row.spent_percent, settings.bar_width),
                format_percentage(row.spent_percent),
                format_money(row.spent, settings),
                format_money(row.allocated, settings),
                if row.is_over_budget { "  over budget" } else { "" }
            ));
        }

        output.push_str(&format!("\nSavings goals\n{}\n", separator(WIDTH)));
        if self.goals.is_empty() {
            output.push_str("No savings goals yet.\n");
        }
        for row in &self.goals {
            output.push_str(&format!(
                "{:<20} {} {:>7}  {} to go, due {} ({})\n",
                truncate(&row.title, 20),
                format_bar(row.progress_percent, settings.bar_width),
                format_percentage(row.progress_percent),
                format_money(row.amount_to_go, settings),
                format_date(row.deadline, settings),
                row.state
            ));
        }

        output.push_str(&format!("\n{}\n", separator(WIDTH)));
        output.push_str(&format!(
            "Budgeted {}, spent {}, remaining {}\n",
            format_money(self.totals.total_budget, settings),
            format_money(self.totals.total_spent, settings),
            format_money(self.totals.total_remaining, settings)
        ));
        output.push_str(&format!(
            "Goals: {} of {} completed, {} saved of {}\n",
            self.goal_overview.completed_goals,
            self.goal_overview.total_goals,
            format_money(self.totals.total_goal_saved, settings),
            format_money(self.totals.total_goal_target, settings)
        ));

        output
    }

    /// Export the headline metrics as `Metric,Value` rows
    pub fn export_csv<W: Write>(&self, writer: W) -> FinboardResult<()> {
        let s = &self.summary;
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Metric", "Value"])?;

        let money = |m: crate::models::Money| m.format_with_symbol("");
        let pct = |p: f64| format!("{:.2}", p);

        let metrics = [
            ("as_of", self.as_of.to_string()),
            ("month", s.current_month.to_string()),
            ("total_balance", money(s.total_balance)),
            ("balance_change_percent", pct(s.balance_change_percent)),
            ("monthly_income", money(s.monthly_income)),
            ("income_change_percent", pct(s.income_change_percent)),
            ("monthly_expenses", money(s.monthly_expenses)),
            ("expenses_change_percent", pct(s.expenses_change_percent)),
            ("savings_rate", pct(s.savings_rate)),
            ("savings_change_percent", pct(s.savings_change_percent)),
            ("total_budget", money(self.totals.total_budget)),
            ("total_spent", money(self.totals.total_spent)),
            ("total_remaining", money(self.totals.total_remaining)),
            ("total_goal_target", money(self.totals.total_goal_target)),
            ("total_goal_saved", money(self.totals.total_goal_saved)),
            ("total_goal_remaining", money(self.totals.total_goal_remaining)),
        ];

        for (metric, value) in metrics {
            csv.write_record([metric, value.as_str()])?;
        }

        csv.flush()?;
        Ok(())
    }
}
