//! Request and response wire types.
//!
//! Field names match the platform's existing JS clients (camelCase),
//! separate from the snake_case domain types in `newsticker-core`.

use chrono::{DateTime, Utc};
use newsticker_core::{TickerState, TickerView};
use serde::{Deserialize, Serialize};

/// Admin write request: one structured action, or a bare `texts`/`text`
/// fallback when no recognized action is given.
#[derive(Debug, Deserialize)]
pub struct TickerActionRequest {
    pub action: Option<String>,
    pub text: Option<String>,
    pub texts: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

/// Public read shape consumed by the homepage ticker strip.
#[derive(Debug, Serialize)]
pub struct PublicTickerResponse {
    pub enabled: bool,
    pub text: String,
    pub texts: Vec<String>,
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<TickerView> for PublicTickerResponse {
    fn from(view: TickerView) -> Self {
        Self {
            enabled: view.enabled,
            text: view.combined_text,
            texts: view.texts,
            last_updated: view.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateTickerResponse {
    pub success: bool,
    pub texts: Vec<String>,
    pub text: String,
}

impl From<TickerState> for UpdateTickerResponse {
    fn from(state: TickerState) -> Self {
        let text = state.combined_text();
        Self { success: true, texts: state.texts, text }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleTickerResponse {
    pub success: bool,
    pub enabled: bool,
}

/// Reporter panel read shape: the raw record (disabled included), or
/// `null` before the first write.
#[derive(Debug, Serialize)]
pub struct ReporterTickerResponse {
    pub ticker: Option<ReporterTicker>,
}

#[derive(Debug, Serialize)]
pub struct ReporterTicker {
    pub text: String,
    pub texts: Vec<String>,
    pub enabled: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "updatedBy", skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl From<TickerState> for ReporterTicker {
    fn from(state: TickerState) -> Self {
        let text = state.combined_text();
        Self {
            text,
            texts: state.texts,
            enabled: state.enabled,
            updated_at: state.updated_at,
            updated_by: state.updated_by,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReporterUpdateRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReporterUpdateResponse {
    pub success: bool,
    pub ticker: ReporterTicker,
}
