//! Public read and admin write endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use newsticker_core::TickerAction;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{
    PublicTickerResponse, TickerActionRequest, ToggleTickerResponse, UpdateTickerResponse,
};
use crate::blocking::blocking;

pub async fn get_ticker(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PublicTickerResponse>, ApiError> {
    let service = state.ticker_service.clone();
    let view = blocking(move || service.get()).await?;
    Ok(Json(PublicTickerResponse::from(view)))
}

/// One endpoint, five structured actions. An unrecognized or missing
/// action falls back to replace-all (`texts` present) or set-single
/// (`text` present); with neither, the current state is returned
/// untouched.
pub async fn update_ticker(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TickerActionRequest>,
) -> Result<Response, ApiError> {
    let service = state.ticker_service.clone();
    let action = req.action.as_deref().and_then(|s| s.parse::<TickerAction>().ok());

    let updated = match action {
        Some(TickerAction::Toggle) => {
            let requested = req.enabled;
            let enabled = blocking(move || service.toggle(requested)).await?;
            return Ok(Json(ToggleTickerResponse { success: true, enabled }).into_response());
        },
        Some(TickerAction::Add) => {
            let text = req.text.unwrap_or_default();
            blocking(move || service.add(&text)).await?
        },
        Some(TickerAction::Delete) => {
            let text = req.text.unwrap_or_default();
            blocking(move || service.delete(&text)).await?
        },
        Some(TickerAction::Edit) => {
            let texts = req.texts.unwrap_or_default();
            blocking(move || service.replace_all(&texts)).await?
        },
        Some(TickerAction::Set) => {
            let text = req.text.unwrap_or_default();
            blocking(move || service.set_single(&text)).await?
        },
        None => match (req.texts, req.text) {
            (Some(texts), _) => blocking(move || service.replace_all(&texts)).await?,
            (None, Some(text)) => blocking(move || service.set_single(&text)).await?,
            (None, None) => {
                blocking(move || Ok(service.current()?.unwrap_or_default())).await?
            },
        },
    };

    Ok(Json(UpdateTickerResponse::from(updated)).into_response())
}
