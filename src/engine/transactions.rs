//! Transaction list filtering and ordering

use serde::Serialize;

use crate::models::{CategoryId, Transaction, TransactionKind};

/// Criteria for narrowing a transaction list
///
/// Every set criterion must match; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionFilter {
    /// Only this kind
    pub kind: Option<TransactionKind>,
    /// Only this category
    pub category: Option<CategoryId>,
    /// Case-insensitive substring of the description
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.category.is_none() && self.search.is_none()
    }

    /// Check a single transaction against the filter
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }

        if let Some(category) = self.category {
            if transaction.category != Some(category) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !transaction.description.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    /// Matching transactions, in their original order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// The `limit` newest transactions, newest first
///
/// Same-day transactions are ordered by descending id so the result is stable.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

/// Order by date descending, then id descending
pub fn sort_newest_first(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
}
