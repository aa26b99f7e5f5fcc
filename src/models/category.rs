//! Category model
//!
//! Categories only label transactions and budgets; no amount is derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;

/// Whether a category collects income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    /// API code "IN"
    #[serde(rename = "IN")]
    Income,
    /// API code "EX"
    #[serde(rename = "EX")]
    Expense,
}

impl CategoryKind {
    /// The two-letter code the API uses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Income => "IN",
            Self::Expense => "EX",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" | "INCOME" => Ok(Self::Income),
            "EX" | "EXPENSE" => Ok(Self::Expense),
            other => Err(format!("unknown category type '{}'", other)),
        }
    }
}

/// A transaction/budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
    #[serde(default)]
    pub description: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: CategoryId, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            description: String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!("IN".parse::<CategoryKind>(), Ok(CategoryKind::Income));
        assert_eq!("ex".parse::<CategoryKind>(), Ok(CategoryKind::Expense));
        assert_eq!("Income".parse::<CategoryKind>(), Ok(CategoryKind::Income));
        assert!("XX".parse::<CategoryKind>().is_err());
        assert_eq!(CategoryKind::Expense.code(), "EX");
    }

    #[test]
    fn test_serialization_uses_api_codes() {
        let cat = Category::new(CategoryId::new(2), "Rent", CategoryKind::Expense);
        let json = serde_json::to_string(&cat).unwrap();
        assert!(json.contains("\"kind\":\"EX\""));

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cat);
    }
}
