//! Database error types.

use derive_more::{Display, Error};

/// Error from the persistence layer.
///
/// Carries a flat message: callers either log it (the engine treats
/// persistence as fire-and-forget) or surface it verbatim at the CLI
/// boundary, so no structured variants are needed.
#[derive(Debug, Clone, Display, Error)]
#[display("database error: {message}")]
pub struct DbError {
    /// What went wrong.
    pub message: String,
}

impl DbError {
    /// Creates a new database error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("query failed: {}", err))
    }
}

impl From<diesel::ConnectionError> for DbError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("connection failed: {}", err))
    }
}
