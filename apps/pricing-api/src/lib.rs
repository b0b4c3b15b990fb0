//! # Pricewise Pricing API
//!
//! HTTP JSON boundary around [`pricewise_core`].
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing API Server                               │
//! │                                                                         │
//! │  Cart UI ───► HTTP (8080) ───► routes ───► pricewise-core              │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                            ApiError JSON                                │
//! │                         { error, code }                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The server holds no state between requests.

pub mod config;
pub mod error;
pub mod routes;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::routes::{calculate_handler, health_handler};

/// Builds the application router.
pub fn app(config: &ApiConfig) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - ERROR: Unexpected failures
/// - WARN: Rejected requests (bad body, broken rule)
/// - INFO: Server lifecycle, priced carts
/// - DEBUG: Request sizes, element decoding detail
///
/// Override with `RUST_LOG`, e.g. `RUST_LOG=pricing_api=trace`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pricewise=debug,pricing_api=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
