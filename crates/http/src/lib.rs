//! HTTP API server for newsticker.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod blocking;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;

use newsticker_service::TickerService;

pub use api_types::{
    PublicTickerResponse, ReporterTickerResponse, ReporterUpdateRequest, TickerActionRequest,
    ToggleTickerResponse, UpdateTickerResponse,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Service owning the ticker mutation cycle.
    pub ticker_service: Arc<TickerService>,
}

/// Routes are wire-compatible with the platform's existing web clients:
/// the public homepage reads `/api/breaking-ticker`, the admin dashboard
/// posts structured actions to it, and the reporter panel uses the
/// `/api/reporter/breaking-ticker` pair.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Browsers hit this service from several platform origins; auth and
    // rate limiting live in the proxy in front of it.
    Router::new()
        .route("/health", get(health))
        .route("/api/breaking-ticker", get(handlers::ticker::get_ticker))
        .route("/api/breaking-ticker", post(handlers::ticker::update_ticker))
        .route("/api/reporter/breaking-ticker", get(handlers::reporter::get_ticker))
        .route("/api/reporter/breaking-ticker", put(handlers::reporter::update_ticker))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
