//! Budget transaction records.
//!
//! An [`Expense`] is a single signed amount: money spent is stored as a
//! negative cost, money received as a positive one.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a new transaction takes money out or brings it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Money spent. Stored with a negative cost.
    #[default]
    Expense,
    /// Money received. Stored with a positive cost.
    Income,
}

impl EntryKind {
    /// Pick the kind from the add-transaction toggle.
    #[must_use]
    pub fn from_is_expense(is_expense: bool) -> Self {
        if is_expense {
            Self::Expense
        } else {
            Self::Income
        }
    }

    /// Parse the words used in the budget screen (`expense`, `income`).
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "expense" | "spend" | "-" => Some(Self::Expense),
            "income" | "earn" | "+" => Some(Self::Income),
            _ => None,
        }
    }

    /// Apply this kind's sign to a magnitude, ignoring the magnitude's own sign.
    #[must_use]
    pub fn signed(self, magnitude: Decimal) -> Decimal {
        match self {
            Self::Expense => -magnitude.abs(),
            Self::Income => magnitude.abs(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// A stored budget transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the store; `None` before insertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// What the money was for.
    pub name: String,

    /// Signed amount: negative for expenses, positive for income.
    pub cost: Decimal,

    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create an unsaved transaction stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, magnitude: Decimal, kind: EntryKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            cost: kind.signed(magnitude),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// The kind implied by the sign of the cost. Zero counts as income.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        if self.cost.is_sign_negative() && !self.cost.is_zero() {
            EntryKind::Expense
        } else {
            EntryKind::Income
        }
    }

    /// Whether this transaction took money out.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind() == EntryKind::Expense
    }
}
