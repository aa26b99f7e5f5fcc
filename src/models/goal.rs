//! Savings goal model
//!
//! Goals are funded by hand through the API; their saved amount is not derived
//! from transaction history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// API identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far (may exceed the target)
    pub current_amount: Money,

    /// Date the goal should be reached by
    pub deadline: NaiveDate,

    #[serde(default)]
    pub description: String,
}

impl SavingsGoal {
    /// Create a new savings goal
    pub fn new(
        id: GoalId,
        title: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            target_amount,
            current_amount,
            deadline,
            description: String::new(),
        }
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.title, self.current_amount, self.target_amount
        )
    }
}
