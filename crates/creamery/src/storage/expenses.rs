//! [`ExpenseStore`] for [`Storage`].

use std::str::FromStr;

use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::{decode_timestamp, decoded, encode_timestamp, ExpenseStore, Storage};
use crate::error::Result;
use crate::expense::Expense;

const TABLE: &str = "expenses";
const SELECT_EXPENSES: &str = "SELECT id, name, cost, created_at FROM expenses";

impl Storage {
    /// Map a row, or `None` when a stored value cannot be decoded.
    fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<Option<Expense>> {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        let cost_str: String = row.get(2)?;
        let created_at_str: String = row.get(3)?;

        let Some(cost) = decoded(TABLE, id, "cost", Decimal::from_str(&cost_str)) else {
            return Ok(None);
        };
        let Some(created_at) = decoded(TABLE, id, "created_at", decode_timestamp(&created_at_str))
        else {
            return Ok(None);
        };

        Ok(Some(Expense {
            id: Some(id),
            name,
            cost,
            created_at,
        }))
    }
}

impl ExpenseStore for Storage {
    fn insert_expense(&self, expense: &Expense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (name, cost, created_at) VALUES (?1, ?2, ?3)",
            params![
                expense.name,
                expense.cost.to_string(),
                encode_timestamp(&expense.created_at),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted expense with id {}", id);
        Ok(id)
    }

    fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let expense = self
            .conn
            .query_row(
                &format!("{SELECT_EXPENSES} WHERE id = ?1"),
                [id],
                Self::row_to_expense,
            )
            .optional()?;
        Ok(expense.flatten())
    }

    fn expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_EXPENSES} ORDER BY created_at DESC, id DESC"))?;
        let expenses = stmt
            .query_map([], Self::row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(expenses.into_iter().flatten().collect())
    }

    fn delete_expense(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    fn delete_all_expenses(&self) -> Result<usize> {
        let affected = self.conn.execute("DELETE FROM expenses", [])?;
        if affected > 0 {
            info!("Deleted {} expenses", affected);
        }
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::EntryKind;
    use crate::ledger::Ledger;
    use crate::logging::init_test_logging;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn create_test_storage() -> Storage {
        Storage::open_in_memory().expect("failed to create test storage")
    }

    #[test]
    fn test_insert_and_get() {
        let storage = create_test_storage();
        let expense = Expense::new("Heavy cream", dec!(6.49), EntryKind::Expense);

        let id = storage.insert_expense(&expense).unwrap();
        let stored = storage.get_expense(id).unwrap().unwrap();

        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.name, "Heavy cream");
        assert_eq!(stored.cost, dec!(-6.49));
        assert_eq!(stored.created_at, expense.created_at);
    }

    #[test]
    fn test_get_nonexistent() {
        let storage = create_test_storage();
        assert!(storage.get_expense(99_999).unwrap().is_none());
    }

    #[test]
    fn test_expenses_newest_first() {
        let storage = create_test_storage();
        let now = Utc::now();

        let mut old = Expense::new("Old", dec!(1), EntryKind::Expense);
        old.created_at = now - Duration::days(2);
        let mut new = Expense::new("New", dec!(1), EntryKind::Expense);
        new.created_at = now;
        let mut mid = Expense::new("Mid", dec!(1), EntryKind::Income);
        mid.created_at = now - Duration::days(1);

        storage.insert_expense(&old).unwrap();
        storage.insert_expense(&new).unwrap();
        storage.insert_expense(&mid).unwrap();

        let names: Vec<_> = storage
            .expenses()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_same_timestamp_orders_by_id() {
        let storage = create_test_storage();
        let stamp = Utc::now();
        for name in ["first", "second"] {
            let mut expense = Expense::new(name, dec!(1), EntryKind::Expense);
            expense.created_at = stamp;
            storage.insert_expense(&expense).unwrap();
        }

        let expenses = storage.expenses().unwrap();
        assert_eq!(expenses[0].name, "second");
        assert_eq!(expenses[1].name, "first");
    }

    #[test]
    fn test_delete() {
        let storage = create_test_storage();
        let id = storage
            .insert_expense(&Expense::new("Cones", dec!(8), EntryKind::Expense))
            .unwrap();

        assert!(storage.delete_expense(id).unwrap());
        assert!(storage.get_expense(id).unwrap().is_none());
        assert!(!storage.delete_expense(id).unwrap());
    }

    #[test]
    fn test_delete_all() {
        let storage = create_test_storage();
        for i in 0..4 {
            storage
                .insert_expense(&Expense::new(format!("Item {i}"), dec!(1), EntryKind::Expense))
                .unwrap();
        }

        assert_eq!(storage.delete_all_expenses().unwrap(), 4);
        assert!(storage.expenses().unwrap().is_empty());
        assert_eq!(storage.delete_all_expenses().unwrap(), 0);
    }

    #[test]
    fn test_decimal_round_trips_exactly() {
        let storage = create_test_storage();
        let id = storage
            .insert_expense(&Expense::new("Vanilla beans", dec!(0.1), EntryKind::Income))
            .unwrap();
        let stored = storage.get_expense(id).unwrap().unwrap();
        assert_eq!(stored.cost.to_string(), "0.1");
    }

    fn insert_raw(storage: &Storage, name: &str, cost: &str, created_at: &str) {
        storage
            .conn
            .execute(
                "INSERT INTO expenses (name, cost, created_at) VALUES (?1, ?2, ?3)",
                params![name, cost, created_at],
            )
            .unwrap();
    }

    #[test]
    fn test_undecodable_rows_are_skipped() {
        init_test_logging();
        let storage = create_test_storage();
        storage
            .insert_expense(&Expense::new("Tips", dec!(5), EntryKind::Income))
            .unwrap();
        insert_raw(&storage, "Smudged", "lots", "2025-03-05T00:00:00.000000Z");
        insert_raw(&storage, "Undated", "-2", "last tuesday");

        let expenses = storage.expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].name, "Tips");
        assert_eq!(Ledger::new(&storage).total().unwrap(), dec!(5));
    }

    #[test]
    fn test_get_undecodable_row_is_none() {
        init_test_logging();
        let storage = create_test_storage();
        insert_raw(&storage, "Smudged", "lots", "2025-03-05T00:00:00.000000Z");
        let id = storage.conn.last_insert_rowid();

        assert!(storage.get_expense(id).unwrap().is_none());
        assert!(storage.delete_expense(id).unwrap());
    }

    #[test]
    fn test_unicode_name() {
        let storage = create_test_storage();
        let id = storage
            .insert_expense(&Expense::new("Matcha 抹茶 🍵", dec!(15), EntryKind::Expense))
            .unwrap();
        assert_eq!(storage.get_expense(id).unwrap().unwrap().name, "Matcha 抹茶 🍵");
    }
}
