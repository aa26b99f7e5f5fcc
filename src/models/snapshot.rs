//! Point-in-time bundle of every record the summaries are computed from

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::category::Category;
use super::goal::SavingsGoal;
use super::ids::{BudgetId, CategoryId, GoalId};
use super::transaction::Transaction;

/// Label shown for uncategorized or unknown categories
pub const UNCATEGORIZED_LABEL: &str = "—";

/// An immutable, already-normalized view of a user's data
///
/// Record order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
}

impl Snapshot {
    pub fn new(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        budgets: Vec<Budget>,
        goals: Vec<SavingsGoal>,
    ) -> Self {
        Self {
            transactions,
            categories,
            budgets,
            goals,
        }
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display name for an optional category reference
    pub fn category_name(&self, id: Option<CategoryId>) -> &str {
        id.and_then(|id| self.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn goal(&self, id: GoalId) -> Option<&SavingsGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.categories.is_empty()
            && self.budgets.is_empty()
            && self.goals.is_empty()
    }
}
