pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;
pub mod utils;

pub use error::{ApiError, ApiResult};
