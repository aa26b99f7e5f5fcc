//! Budget model
//!
//! An amount allocated to one category for one calendar month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::month::Month;

/// A monthly budget for a category
///
/// Nothing stops two budgets from targeting the same (category, month); every
/// aggregate simply sums what it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// API identifier
    pub id: BudgetId,

    /// The category this budget is for
    pub category: CategoryId,

    /// Target month
    pub month: Month,

    /// Allocated amount (non-negative)
    pub amount: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(id: BudgetId, category: CategoryId, month: Month, amount: Money) -> Self {
        Self {
            id,
            category,
            month,
            amount,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} for {}", self.month, self.amount, self.category)
    }
}
