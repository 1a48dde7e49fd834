//! Error types for creamery.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`Error`] enum defined here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for creamery operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Record Errors ===
    /// A required text field was blank.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the field.
        field: &'static str,
    },

    /// No record with the given id exists.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Record kind ("expense" or "recipe").
        kind: &'static str,
        /// The id that was looked up.
        id: i64,
    },

    /// A date could not be parsed.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    // === Calculator Errors ===
    /// A calculator key label was not recognised.
    #[error("unknown calculator key '{0}'")]
    UnknownToken(String),

    // === I/O Errors ===
    /// File system or terminal operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for creamery operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for an expense.
    #[must_use]
    pub fn expense_not_found(id: i64) -> Self {
        Self::NotFound {
            kind: "expense",
            id,
        }
    }

    /// Create a not-found error for a recipe.
    #[must_use]
    pub fn recipe_not_found(id: i64) -> Self {
        Self::NotFound { kind: "recipe", id }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error means a record was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by user input rather than the system.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyField { .. }
                | Self::NotFound { .. }
                | Self::InvalidDate(_)
                | Self::UnknownToken(_)
        )
    }
}
