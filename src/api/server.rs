use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{
    community_join_handler, leaderboard_handler, method_not_allowed, retry_failed_emails_handler,
    send_bulk_emails_handler, signup_handler, verify_handler,
};
use crate::config::{self, AppConfig};
use crate::db;
use crate::email::{EmailSender, ResendClient};
use crate::telemetry;

/// Shared handler state. Cloned per request; everything inside is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub email: Arc<dyn EmailSender>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, email: Arc<dyn EmailSender>, config: AppConfig) -> Self {
        Self {
            pool,
            email,
            config: Arc::new(config),
        }
    }
}

/// Permissive CORS for the marketing site. Every OPTIONS request is answered
/// here with 200 and an empty body before it reaches a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the router around an existing state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/signup",
            post(signup_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/verify",
            get(verify_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/community-join",
            post(community_join_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/leaderboard",
            get(leaderboard_handler).fallback(method_not_allowed),
        )
        // Batch jobs (admin bearer token)
        .route(
            "/api/send-bulk-emails",
            get(send_bulk_emails_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/retry-failed-emails",
            get(retry_failed_emails_handler).fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Load configuration and dependencies, then build the state.
pub async fn build_state() -> Result<AppState, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Secrets must land in the environment before the config is read
    config::load_secrets_from_manager().await?;
    let app_config = AppConfig::from_env()?;

    let pool = db::create_pool(&app_config.database_url).await?;
    let email = ResendClient::new(&app_config.email)?;

    if app_config.email.api_key.is_none() {
        tracing::warn!("RESEND_API_KEY not set; outbound email will fail");
    }

    Ok(AppState::new(pool, Arc::new(email), app_config))
}

pub async fn create_app() -> Result<Router, Box<dyn std::error::Error>> {
    Ok(router(build_state().await?))
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG may come from .env
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    info!("Starting NetWorth API server");

    let state = build_state().await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = router(state);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutting down gracefully...");
    };

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
