use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::db::errors::{DatabaseError, Result};

/// Ensure the URL asks for TLS unless it already states an sslmode.
pub fn with_ssl_mode(database_url: &str) -> String {
    if database_url.contains("sslmode=") {
        return database_url.to_string();
    }
    let separator = if database_url.contains('?') { "&" } else { "?" };
    format!("{}{}sslmode=require", database_url, separator)
}

/// Create the connection pool used by every handler.
///
/// The pool stays small and may scale to zero: in Lambda each invocation
/// only needs one connection, and RDS Proxy does the real pooling.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let url = with_ssl_mode(database_url);

    info!("Creating database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Duration::from_secs(10))
        .max_lifetime(Duration::from_secs(300))
        .test_before_acquire(true)
        .connect_lazy(&url)
        .map_err(|e| DatabaseError::ConnectionError(format!("Failed to create pool: {}", e)))?;

    info!("Database connection pool created");
    Ok(pool)
}
