use rusqlite::ffi::ErrorCode;
use thiserror::Error;

/// Result type for shoplist-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed
    #[error("{}", describe_database_error(.0))]
    Database(#[source] rusqlite::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A UNIQUE constraint rejected the write (duplicate barcode)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Update against an id that does not exist
    #[error("Item not found: {0}")]
    NotFound(i64),

    /// Field name is not an updatable item attribute
    #[error("Invalid field: '{0}' is not an updatable item field")]
    InvalidField(String),

    /// Partial update called without any field
    #[error("Update requires at least one field")]
    EmptyUpdate,

    /// Database file was written by a newer build
    #[error("Unsupported schema version {found} (this build supports up to {supported})")]
    UnsupportedSchema { found: i32, supported: i32 },
}

fn describe_database_error(err: &rusqlite::Error) -> String {
    let msg = err.to_string();
    // Files touched by other tools may lack the expected table or columns
    if msg.contains("no such column") || msg.contains("no such table") {
        format!(
            "Database schema mismatch: {}. The file may not be a shopping list database.",
            msg
        )
    } else {
        format!("Database error: {}", msg)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, detail)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Error::ConstraintViolation(
                    detail
                        .clone()
                        .unwrap_or_else(|| "constraint failed".to_string()),
                )
            }
            _ => Error::Database(err),
        }
    }
}
