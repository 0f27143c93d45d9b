pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod email;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use api::server::{create_app, router, run_server, AppState};
pub use config::{AppConfig, ConfigError};
pub use db::DatabaseError;
pub use domain::DomainError;
pub use email::{EmailError, EmailMessage, EmailSender, ResendClient};
