//! Transaction view endpoints - derived lists, metadata, reload
//!
//! Endpoints:
//! - api_transactions: Visible set plus aggregate total (JSON)
//! - api_base_transactions: Base-filtered set (JSON)
//! - api_metadata: Payload metadata plus installment options (JSON)
//! - api_reload: Re-fetch the payload from the source

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use paydash_core::{Metadata, Transaction};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

/// Visible transactions response
#[derive(Debug, Serialize)]
pub struct VisibleResponse {
    pub transactions: Vec<Transaction>,
    pub total: f64,
    pub count: usize,
    pub label: String,
}

/// Base transactions response
#[derive(Debug, Serialize)]
pub struct BaseResponse {
    pub transactions: Vec<Transaction>,
    pub count: usize,
}

/// Metadata response for the filter pane
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub metadata: Metadata,
    pub installment_options: Vec<u32>,
}

/// Get the visible set and its aggregate total (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
) -> Result<Json<VisibleResponse>, ApiError> {
    let now = Utc::now();
    let view = state.dashboard.derived_at(now)?;
    let label = state.dashboard.period_label_at(now);

    Ok(Json(VisibleResponse {
        total: view.total,
        count: view.visible_transactions.len(),
        transactions: view.visible_transactions,
        label,
    }))
}

/// Get the base-filtered set (JSON API)
pub async fn api_base_transactions(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse>, ApiError> {
    let view = state.dashboard.derived_at(Utc::now())?;

    Ok(Json(BaseResponse {
        count: view.base_transactions.len(),
        transactions: view.base_transactions,
    }))
}

/// Get the payload metadata and installment options (JSON API)
pub async fn api_metadata(
    State(state): State<AppState>,
) -> Result<Json<MetadataResponse>, ApiError> {
    let metadata = state.dashboard.metadata()?;
    let installment_options = state.dashboard.installment_options()?;

    Ok(Json(MetadataResponse {
        metadata,
        installment_options,
    }))
}

/// Re-fetch the payload from the source (JSON API)
pub async fn api_reload(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.dashboard.reload().await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
