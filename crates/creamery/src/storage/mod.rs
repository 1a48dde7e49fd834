//! Storage layer for creamery.
//!
//! Budget transactions and recipes live in one `SQLite` database. The rest of
//! the crate talks to it through the [`ExpenseStore`] and [`RecipeStore`]
//! traits, which [`Storage`] implements, so services and screens receive the
//! store as an explicit argument.
//!
//! Both collections are listed newest first. Timestamps are stored as
//! fixed-width RFC 3339 strings so that text order is time order; rows with
//! the same timestamp fall back to descending id.

mod expenses;
pub mod migrations;
mod recipes;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::expense::Expense;
use crate::recipe::Recipe;

/// Persistence for budget transactions.
pub trait ExpenseStore {
    /// Store a new transaction and return its id. `expense.id` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_expense(&self, expense: &Expense) -> Result<i64>;

    /// Look up one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_expense(&self, id: i64) -> Result<Option<Expense>>;

    /// All transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn expenses(&self) -> Result<Vec<Expense>>;

    /// Delete one transaction. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_expense(&self, id: i64) -> Result<bool>;

    /// Delete every transaction and return how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_all_expenses(&self) -> Result<usize>;
}

/// Persistence for recipes.
pub trait RecipeStore {
    /// Store a new recipe and return its id. `recipe.id` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_recipe(&self, recipe: &Recipe) -> Result<i64>;

    /// Look up one recipe.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_recipe(&self, id: i64) -> Result<Option<Recipe>>;

    /// All recipes, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn recipes(&self) -> Result<Vec<Recipe>>;

    /// Overwrite the stored fields of `recipe` (matched by its id).
    /// Returns `false` if no such recipe exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `recipe.id` is `None` or the write fails.
    fn update_recipe(&self, recipe: &Recipe) -> Result<bool>;

    /// Delete one recipe. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete_recipe(&self, id: i64) -> Result<bool>;
}

/// `SQLite`-backed store for both collections.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    pub(crate) conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist
    /// and brings the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        migrations::initialize_schema(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record counts and file size.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let expense_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        let recipe_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            expense_count,
            recipe_count,
            db_size_bytes,
        })
    }
}

/// Statistics about the storage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StorageStats {
    /// Number of budget transactions.
    pub expense_count: i64,
    /// Number of recipes.
    pub recipe_count: i64,
    /// Size of the database file in bytes (0 for in-memory databases).
    pub db_size_bytes: u64,
}

/// Encode a timestamp so that text order matches time order.
fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(text: &str) -> chrono::ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text).map(|dt| dt.with_timezone(&Utc))
}

/// Keep a decoded column value, or warn and drop the row it came from.
fn decoded<T, E: std::fmt::Display>(
    table: &str,
    id: i64,
    column: &str,
    value: std::result::Result<T, E>,
) -> Option<T> {
    match value {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Skipping {} row {}: bad {} ({})", table, id, column, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::EntryKind;
    use crate::recipe::RecipeFields;
    use rust_decimal_macros::dec;

    fn temp_db_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("creamery_{tag}_{}.db", std::process::id()))
    }

    fn remove_db(path: &Path) {
        let _ = std::fs::remove_file(path);
        let _ = std::fs::remove_file(path.with_extension("db-wal"));
        let _ = std::fs::remove_file(path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_in_memory() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(storage.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_stats_empty() {
        let storage = Storage::open_in_memory().unwrap();
        let stats = storage.stats().unwrap();

        assert_eq!(stats.expense_count, 0);
        assert_eq!(stats.recipe_count, 0);
        assert_eq!(stats.db_size_bytes, 0);
    }

    #[test]
    fn test_stats_counts_both_collections() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .insert_expense(&Expense::new("Milk", dec!(3), EntryKind::Expense))
            .unwrap();
        storage
            .insert_recipe(&Recipe::new(RecipeFields::named("Vanilla")))
            .unwrap();
        storage
            .insert_recipe(&Recipe::new(RecipeFields::named("Mint")))
            .unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.expense_count, 1);
        assert_eq!(stats.recipe_count, 2);
    }

    #[test]
    fn test_open_file_based_persists() {
        let db_path = temp_db_path("persist");
        remove_db(&db_path);

        {
            let storage = Storage::open(&db_path).unwrap();
            assert_eq!(storage.path(), db_path);
            storage
                .insert_expense(&Expense::new("Sugar", dec!(2.10), EntryKind::Expense))
                .unwrap();
        }

        let reopened = Storage::open(&db_path).unwrap();
        let expenses = reopened.expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].cost, dec!(-2.10));
        assert!(reopened.stats().unwrap().db_size_bytes > 0);

        drop(reopened);
        remove_db(&db_path);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let root = std::env::temp_dir().join(format!("creamery_nested_{}", std::process::id()));
        let nested_path = root.join("inner").join("creamery.db");
        let _ = std::fs::remove_dir_all(&root);

        let storage = Storage::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(storage);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_timestamp_encoding_is_fixed_width() {
        let a = DateTime::parse_from_rfc3339("2025-03-05T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2025-03-05T10:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);

        let (ea, eb) = (encode_timestamp(&a), encode_timestamp(&b));
        assert_eq!(ea.len(), eb.len());
        assert!(ea < eb);
        assert_eq!(decode_timestamp(&eb).unwrap(), b);
    }

    #[test]
    fn test_decode_bad_timestamp() {
        assert!(decode_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_decoded_drops_bad_values() {
        assert_eq!(decoded("expenses", 1, "cost", Ok::<_, String>(5)), Some(5));
        assert_eq!(decoded("expenses", 2, "cost", Err::<i32, _>("nope")), None);
    }
}
