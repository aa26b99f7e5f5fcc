//! Records exactly as the REST API returns them
//!
//! Decimal fields arrive as strings ("125.50") from some endpoints and as
//! numbers from others, and the transaction type is not consistently cased.
//! Nothing here is trusted until it passes through the normalizer.

use serde::{Deserialize, Serialize};

/// A monetary field as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// `/core/transactions/` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    /// Some payloads carry the write-side field instead
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: Option<RawAmount>,
}

/// `/core/categories/` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `/core/budgets/` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBudget {
    pub id: i64,
    pub category: i64,
    pub month: String,
    #[serde(default)]
    pub amount: Option<RawAmount>,
}

/// `/core/goals/` item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGoal {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub target_amount: Option<RawAmount>,
    #[serde(default)]
    pub current_amount: Option<RawAmount>,
    pub deadline: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The four list endpoints bundled into one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
    #[serde(default)]
    pub budgets: Vec<RawBudget>,
    #[serde(default)]
    pub goals: Vec<RawGoal>,
}
