//! `SQLite` schema definitions for creamery.

/// SQL statement to create the expenses table.
///
/// `cost` holds a decimal string so amounts round-trip exactly.
pub const CREATE_EXPENSES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    cost TEXT NOT NULL,
    created_at TEXT NOT NULL
)
";

/// Index for newest-first listing of expenses.
pub const CREATE_EXPENSES_CREATED_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_expenses_created_at ON expenses(created_at DESC)
";

/// SQL statement to create the recipes table.
pub const CREATE_RECIPES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    ingredients TEXT NOT NULL DEFAULT '',
    last_made TEXT NOT NULL,
    tutorial_link TEXT NOT NULL DEFAULT '',
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
)
";

/// Index for newest-first listing of recipes.
pub const CREATE_RECIPES_CREATED_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at DESC)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_EXPENSES_TABLE,
    CREATE_EXPENSES_CREATED_INDEX,
    CREATE_RECIPES_TABLE,
    CREATE_RECIPES_CREATED_INDEX,
    CREATE_METADATA_TABLE,
];
