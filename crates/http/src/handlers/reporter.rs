//! Reporter panel endpoints.
//!
//! The reporter panel shows the raw record (including attribution and the
//! enabled flag) and submits one bullet-separated string instead of
//! structured actions.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{
    ReporterTicker, ReporterTickerResponse, ReporterUpdateRequest, ReporterUpdateResponse,
};
use crate::blocking::blocking;

/// Header the platform's auth proxy injects after verifying the caller's
/// credential. This service trusts it as-is and never inspects tokens.
const VERIFIED_USER_HEADER: &str = "x-verified-user";

pub async fn get_ticker(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReporterTickerResponse>, ApiError> {
    let service = state.ticker_service.clone();
    let current = blocking(move || service.current()).await?;
    Ok(Json(ReporterTickerResponse { ticker: current.map(ReporterTicker::from) }))
}

pub async fn update_ticker(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ReporterUpdateRequest>,
) -> Result<Json<ReporterUpdateResponse>, ApiError> {
    let updated_by = headers
        .get(VERIFIED_USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let service = state.ticker_service.clone();
    let text = req.text.unwrap_or_default();
    let updated =
        blocking(move || service.apply_free_text(&text, updated_by.as_deref())).await?;

    Ok(Json(ReporterUpdateResponse { success: true, ticker: ReporterTicker::from(updated) }))
}
