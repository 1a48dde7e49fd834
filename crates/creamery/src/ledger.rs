//! Budget ledger.
//!
//! [`Ledger`] wraps an [`ExpenseStore`] with the budget rules: expenses are
//! stored negative and income positive, names are required, and the balance
//! is recomputed from the stored records every time it is read.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::expense::{EntryKind, Expense};
use crate::storage::ExpenseStore;

/// Characters stripped from amount text before parsing.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Parse amount text typed by the user.
///
/// Surrounding whitespace, a leading currency symbol and thousands
/// separators are ignored. Text that still isn't a number counts as zero.
#[must_use]
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned: String = text
        .trim()
        .trim_start_matches(CURRENCY_SYMBOLS)
        .chars()
        .filter(|c| *c != ',')
        .collect();

    Decimal::from_str(&cleaned).unwrap_or_else(|_| {
        debug!(text, "unparsable amount treated as zero");
        Decimal::ZERO
    })
}

/// Sum of the signed costs.
#[must_use]
pub fn total_of(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.cost).sum()
}

/// The running total of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// Sum of all costs.
    pub total: Decimal,
    /// Number of transactions summed.
    pub transactions: usize,
}

impl Balance {
    /// Compute the balance of a list of transactions.
    #[must_use]
    pub fn of(expenses: &[Expense]) -> Self {
        Self {
            total: total_of(expenses),
            transactions: expenses.len(),
        }
    }

    /// Whether the balance is zero or positive.
    #[must_use]
    pub fn is_in_the_green(&self) -> bool {
        !self.total.is_sign_negative() || self.total.is_zero()
    }
}

/// Budget operations over an injected store.
#[derive(Debug)]
pub struct Ledger<'a, S: ExpenseStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ExpenseStore + ?Sized> Ledger<'a, S> {
    /// Create a ledger backed by `store`.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Record a transaction. The sign of `magnitude` is ignored; `kind`
    /// decides it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] for a blank name, or a storage error.
    pub fn add(&self, name: &str, magnitude: Decimal, kind: EntryKind) -> Result<Expense> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyField { field: "name" });
        }

        let mut expense = Expense::new(name, magnitude, kind);
        let id = self.store.insert_expense(&expense)?;
        expense.id = Some(id);

        info!(id, %kind, cost = %expense.cost, "Added transaction");
        Ok(expense)
    }

    /// Record a transaction from typed amount text. See [`parse_amount`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] for a blank name, or a storage error.
    pub fn add_text(&self, name: &str, amount: &str, kind: EntryKind) -> Result<Expense> {
        self.add(name, parse_amount(amount), kind)
    }

    /// All transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Expense>> {
        self.store.expenses()
    }

    /// Delete one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no transaction has this id.
    pub fn delete_one(&self, id: i64) -> Result<()> {
        if !self.store.delete_expense(id)? {
            return Err(Error::expense_not_found(id));
        }
        info!(id, "Deleted transaction");
        Ok(())
    }

    /// Delete every transaction, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn delete_all(&self) -> Result<usize> {
        self.store.delete_all_expenses()
    }

    /// Sum of all costs, read fresh from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn total(&self) -> Result<Decimal> {
        Ok(total_of(&self.list()?))
    }

    /// Total and transaction count, read fresh from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn balance(&self) -> Result<Balance> {
        Ok(Balance::of(&self.list()?))
    }
}
