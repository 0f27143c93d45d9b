// API handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Extract and normalize request input
// 2. Check the admin token where required
// 3. Call domain logic
// 4. Map the domain result onto a status code and JSON body

pub mod bulk_email;
pub mod community;
pub mod leaderboard;
pub mod signup;
pub mod verify;

use crate::api::error::ApiError;

pub use bulk_email::{retry_failed_emails_handler, send_bulk_emails_handler};
pub use community::community_join_handler;
pub use leaderboard::leaderboard_handler;
pub use signup::signup_handler;
pub use verify::verify_handler;

/// Fallback for any method a route does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
