// Domain layer - business rules with no HTTP concerns
// Handlers validate input shape, call into these modules and map the
// DomainError onto a status code

pub mod bulk_email;
pub mod community;
pub mod leaderboard;
pub mod signup;
pub mod verification;

use crate::db::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A unique key already exists; the message is safe to show to users.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid verification token")]
    InvalidToken,

    #[error("Verification token has expired")]
    TokenExpired,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DatabaseError> for DomainError {
    fn from(e: DatabaseError) -> Self {
        DomainError::Database(e.to_string())
    }
}

pub use bulk_email::{retry_failed_emails, send_bulk_emails, send_sequentially, BatchReport};
pub use community::join_community;
pub use leaderboard::{load_leaderboard, rank_rows};
pub use signup::{register_signup, SignupOutcome};
pub use verification::{decide, verify_email, VerificationDecision, VerificationOutcome};
