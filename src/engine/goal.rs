//! Savings goal progress

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::{Money, SavingsGoal};

use super::percent::percent_of;

/// Derived progress of a single goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// `current / target * 100`, unclamped (an overfunded goal reports > 100)
    pub progress_percent: f64,
    /// Deadline passed before the goal was reached
    pub is_overdue: bool,
    /// Saved at least the target
    pub is_achieved: bool,
    /// Target minus saved, floored at zero
    pub amount_to_go: Money,
}

/// Display state of a goal; achieved wins over overdue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalState {
    Achieved,
    Overdue,
    InProgress,
}

impl fmt::Display for GoalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Achieved => write!(f, "Achieved"),
            Self::Overdue => write!(f, "Overdue"),
            Self::InProgress => write!(f, "In Progress"),
        }
    }
}

impl GoalProgress {
    pub fn state(&self) -> GoalState {
        if self.is_achieved {
            GoalState::Achieved
        } else if self.is_overdue {
            GoalState::Overdue
        } else {
            GoalState::InProgress
        }
    }
}

/// A goal together with its progress as of a reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalStatus {
    pub goal: SavingsGoal,
    pub progress: GoalProgress,
}

impl GoalStatus {
    pub fn compute(goal: &SavingsGoal, reference_date: NaiveDate) -> Self {
        Self {
            goal: goal.clone(),
            progress: compute_goal_progress(goal, reference_date),
        }
    }
}

/// Overview across all goals (goals page header)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalOverview {
    pub total_goals: usize,
    pub completed_goals: usize,
    /// `total saved / total target * 100`, 0 without any target
    pub overall_progress_percent: f64,
}

/// Derive the progress of `goal` as of `reference_date`
pub fn compute_goal_progress(goal: &SavingsGoal, reference_date: NaiveDate) -> GoalProgress {
    let target = goal.target_amount;
    let current = goal.current_amount;

    let progress_percent = if target.is_positive() {
        percent_of(current, target)
    } else {
        0.0
    };
    let is_achieved = current >= target;

    GoalProgress {
        progress_percent,
        is_overdue: goal.deadline < reference_date && !is_achieved,
        is_achieved,
        amount_to_go: target.saturating_remaining(current),
    }
}

/// Count completed goals and compute overall funding progress
pub fn compute_goal_overview(goals: &[SavingsGoal]) -> GoalOverview {
    let total_target: Money = goals.iter().map(|g| g.target_amount).sum();
    let total_saved: Money = goals.iter().map(|g| g.current_amount).sum();

    GoalOverview {
        total_goals: goals.len(),
        completed_goals: goals
            .iter()
            .filter(|g| g.current_amount >= g.target_amount)
            .count(),
        overall_progress_percent: if total_target.is_positive() {
            percent_of(total_saved, total_target)
        } else {
            0.0
        },
    }
}
