//! Normalization of raw API records into typed models
//!
//! In lenient mode bad amounts become zero and records whose date or kind
//! cannot be understood are dropped, each with a warning. Strict mode turns
//! the same conditions into validation errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{
    Budget, BudgetId, Category, CategoryId, CategoryKind, GoalId, Money, Month, SavingsGoal,
    Snapshot, Transaction, TransactionId, TransactionKind,
};

use super::raw::{RawAmount, RawBudget, RawCategory, RawGoal, RawSnapshot, RawTransaction};

/// How to treat malformed raw records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// Coerce bad amounts to zero, drop undatable records
    #[default]
    Lenient,
    /// Reject the snapshot on the first malformed record
    Strict,
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Parse a date the way the API sends them: "2024-01-05" or a timestamp
/// whose first ten characters are that date.
pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let day = s.get(..10)?;
    if s.len() > 10 && !s[10..].starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Converts raw API records into engine-ready models
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    mode: NormalizeMode,
}

impl Normalizer {
    pub fn new(mode: NormalizeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> NormalizeMode {
        self.mode
    }

    /// Normalize every section of a raw snapshot
    pub fn snapshot(&self, raw: RawSnapshot) -> FinboardResult<Snapshot> {
        let raw_counts = (
            raw.transactions.len(),
            raw.categories.len(),
            raw.budgets.len(),
            raw.goals.len(),
        );

        let snapshot = Snapshot::new(
            self.collect(raw.transactions, |r| self.transaction(r))?,
            self.collect(raw.categories, |r| self.category(r))?,
            self.collect(raw.budgets, |r| self.budget(r))?,
            self.collect(raw.goals, |r| self.goal(r))?,
        );

        let dropped = (raw_counts.0 - snapshot.transactions.len())
            + (raw_counts.1 - snapshot.categories.len())
            + (raw_counts.2 - snapshot.budgets.len())
            + (raw_counts.3 - snapshot.goals.len());
        if dropped > 0 {
            log::warn!("Dropped {} malformed record(s) while normalizing snapshot", dropped);
        }
        log::debug!(
            "Normalized snapshot: {} transactions, {} categories, {} budgets, {} goals",
            snapshot.transactions.len(),
            snapshot.categories.len(),
            snapshot.budgets.len(),
            snapshot.goals.len()
        );

        Ok(snapshot)
    }

    fn collect<R, T>(
        &self,
        records: Vec<R>,
        convert: impl Fn(R) -> FinboardResult<Option<T>>,
    ) -> FinboardResult<Vec<T>> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            if let Some(item) = convert(record)? {
                out.push(item);
            }
        }
        Ok(out)
    }

    pub fn transaction(&self, raw: RawTransaction) -> FinboardResult<Option<Transaction>> {
        let what = format!("transaction {}", raw.id);

        let Some(date) = self.date(&raw.date, &what)? else {
            return Ok(None);
        };
        let kind = match TransactionKind::from_str(&raw.kind) {
            Ok(kind) => kind,
            Err(e) => return self.reject(format!("{}: {}", what, e)),
        };
        let amount = self.amount(raw.amount.as_ref(), &what)?;

        Ok(Some(Transaction {
            id: TransactionId::new(raw.id),
            date,
            description: raw.description.unwrap_or_default(),
            category: raw.category.or(raw.category_id).map(CategoryId::new),
            kind,
            amount,
        }))
    }

    pub fn category(&self, raw: RawCategory) -> FinboardResult<Option<Category>> {
        let kind = match CategoryKind::from_str(&raw.kind) {
            Ok(kind) => kind,
            Err(e) => return self.reject(format!("category {}: {}", raw.id, e)),
        };

        Ok(Some(Category {
            id: CategoryId::new(raw.id),
            name: raw.name,
            kind,
            description: raw.description.unwrap_or_default(),
        }))
    }

    pub fn budget(&self, raw: RawBudget) -> FinboardResult<Option<Budget>> {
        let what = format!("budget {}", raw.id);

        let month = parse_api_date(&raw.month)
            .map(Month::from_date)
            .or_else(|| Month::parse(&raw.month).ok());
        let Some(month) = month else {
            return self.reject(format!("{}: invalid month '{}'", what, raw.month));
        };
        let amount = self.amount(raw.amount.as_ref(), &what)?;

        Ok(Some(Budget::new(
            BudgetId::new(raw.id),
            CategoryId::new(raw.category),
            month,
            amount,
        )))
    }

    pub fn goal(&self, raw: RawGoal) -> FinboardResult<Option<SavingsGoal>> {
        let what = format!("goal {}", raw.id);

        let Some(deadline) = self.date(&raw.deadline, &what)? else {
            return Ok(None);
        };
        let target_amount = self.amount(raw.target_amount.as_ref(), &format!("{} target", what))?;
        let current_amount =
            self.amount(raw.current_amount.as_ref(), &format!("{} saved amount", what))?;

        Ok(Some(SavingsGoal {
            id: GoalId::new(raw.id),
            title: raw.title,
            target_amount,
            current_amount,
            deadline,
            description: raw.description.unwrap_or_default(),
        }))
    }

    /// Coerce a wire amount into a non-negative `Money`
    pub fn amount(&self, raw: Option<&RawAmount>, what: &str) -> FinboardResult<Money> {
        let parsed = match raw {
            None => None,
            Some(RawAmount::Number(n)) => Money::from_f64(*n),
            Some(RawAmount::Text(s)) => Money::parse(s).ok(),
        };

        let Some(amount) = parsed else {
            let shown = match raw {
                None => "null".to_string(),
                Some(RawAmount::Number(n)) => n.to_string(),
                Some(RawAmount::Text(s)) => format!("'{}'", s),
            };
            return match self.mode {
                NormalizeMode::Strict => Err(FinboardError::Validation(format!(
                    "{}: invalid amount {}",
                    what, shown
                ))),
                NormalizeMode::Lenient => {
                    log::warn!("{}: invalid amount {}, treating as 0", what, shown);
                    Ok(Money::zero())
                }
            };
        };

        if amount.is_negative() {
            return match self.mode {
                NormalizeMode::Strict => Err(FinboardError::Validation(format!(
                    "{}: negative amount {}",
                    what, amount
                ))),
                NormalizeMode::Lenient => {
                    log::warn!("{}: negative amount {}, using its magnitude", what, amount);
                    Ok(amount.abs())
                }
            };
        }

        Ok(amount)
    }

    fn date(&self, raw: &str, what: &str) -> FinboardResult<Option<NaiveDate>> {
        match parse_api_date(raw) {
            Some(date) => Ok(Some(date)),
            None => self.reject(format!("{}: invalid date '{}'", what, raw)),
        }
    }

    fn reject<T>(&self, message: String) -> FinboardResult<Option<T>> {
        match self.mode {
            NormalizeMode::Strict => Err(FinboardError::Validation(message)),
            NormalizeMode::Lenient => {
                log::warn!("Skipping record: {}", message);
                Ok(None)
            }
        }
    }
}
