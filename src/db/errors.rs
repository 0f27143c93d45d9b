use thiserror::Error;

/// PostgreSQL SQLSTATE for unique_violation.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Query execution error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl DatabaseError {
    /// Check if this is a unique constraint violation
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::QueryError(e) => e
                .as_database_error()
                .and_then(|db_error| db_error.code())
                .map(|code| code == UNIQUE_VIOLATION)
                .unwrap_or(false),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!DatabaseError::QueryError(sqlx::Error::RowNotFound).is_unique_violation());
        assert!(!DatabaseError::ConnectionError("down".to_string()).is_unique_violation());
        assert!(!DatabaseError::NotFound("signup".to_string()).is_unique_violation());
    }
}
