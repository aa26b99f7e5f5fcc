//! Savings Goals Report
//!
//! Progress toward every goal as of a reference date, with an overview of
//! how many are complete.

use std::io::Write;

use chrono::NaiveDate;
use tabled::Tabled;

use crate::config::Settings;
use crate::display::{
    format_bar, format_date, format_money, format_percentage, render_table, separator,
};
use crate::engine::{compute_goal_overview, GoalOverview, GoalState, GoalStatus};
use crate::error::FinboardResult;
use crate::models::{GoalId, Money, SavingsGoal, Snapshot};

/// One goal with its progress
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub goal_id: GoalId,
    pub title: String,
    pub description: String,
    pub target: Money,
    pub saved: Money,
    pub amount_to_go: Money,
    pub progress_percent: f64,
    pub deadline: NaiveDate,
    pub state: GoalState,
}

impl GoalRow {
    pub fn new(goal: &SavingsGoal, as_of: NaiveDate) -> Self {
        let status = GoalStatus::compute(goal, as_of);
        Self {
            goal_id: goal.id,
            title: goal.title.clone(),
            description: goal.description.clone(),
            target: goal.target_amount,
            saved: goal.current_amount,
            amount_to_go: status.progress.amount_to_go,
            progress_percent: status.progress.progress_percent,
            deadline: goal.deadline,
            state: status.progress.state(),
        }
    }

    /// Multi-line detail view
    pub fn format_detail(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format!("Goal {}: {}\n", self.goal_id, self.title));
        output.push_str(&separator(40));
        output.push('\n');
        if !self.description.is_empty() {
            output.push_str(&format!("{}\n\n", self.description));
        }
        output.push_str(&format!(
            "Saved:     {} of {}\n",
            format_money(self.saved, settings),
            format_money(self.target, settings)
        ));
        output.push_str(&format!(
            "To go:     {}\n",
            format_money(self.amount_to_go, settings)
        ));
        output.push_str(&format!(
            "Progress:  {} {}\n",
            format_bar(self.progress_percent, settings.bar_width),
            format_percentage(self.progress_percent)
        ));
        output.push_str(&format!(
            "Deadline:  {}\n",
            format_date(self.deadline, settings)
        ));
        output.push_str(&format!("Status:    {}\n", self.state));
        output
    }
}

#[derive(Tabled)]
struct GoalTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "To Go")]
    to_go: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Goals report as of a reference date
#[derive(Debug, Clone)]
pub struct GoalsReport {
    pub as_of: NaiveDate,
    pub rows: Vec<GoalRow>,
    pub overview: GoalOverview,
}

impl GoalsReport {
    pub fn generate(snapshot: &Snapshot, as_of: NaiveDate) -> Self {
        Self {
            as_of,
            rows: snapshot.goals.iter().map(|g| GoalRow::new(g, as_of)).collect(),
            overview: compute_goal_overview(&snapshot.goals),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Savings Goals - as of {}\n",
            format_date(self.as_of, settings)
        ));

        let table_rows = self
            .rows
            .iter()
            .map(|row| GoalTableRow {
                id: row.goal_id.to_string(),
                title: row.title.clone(),
                saved: format_money(row.saved, settings),
                target: format_money(row.target, settings),
                to_go: format_money(row.amount_to_go, settings),
                progress: format!(
                    "{} {}",
                    format_bar(row.progress_percent, settings.bar_width),
                    format_percentage(row.progress_percent)
                ),
                deadline: format_date(row.deadline, settings),
                status: row.state.to_string(),
            })
            .collect();
        output.push_str(&render_table(table_rows, "No savings goals found."));
        output.push('\n');

        output.push_str(&format!(
            "\n{} of {} goals completed, {} overall\n",
            self.overview.completed_goals,
            self.overview.total_goals,
            format_percentage(self.overview.overall_progress_percent)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Goal ID",
            "Title",
            "Target",
            "Saved",
            "To Go",
            "Progress %",
            "Deadline",
            "Status",
        ])?;

        for row in &self.rows {
            csv.write_record([
                row.goal_id.get().to_string(),
                row.title.clone(),
                row.target.format_with_symbol(""),
                row.saved.format_with_symbol(""),
                row.amount_to_go.format_with_symbol(""),
                format!("{:.2}", row.progress_percent),
                row.deadline.to_string(),
                row.state.to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }

    pub fn count_in_state(&self, state: GoalState) -> usize {
        self.rows.iter().filter(|r| r.state == state).count()
    }
}
