//! Export endpoint - assembles the document request for the PDF collaborator

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use paydash_core::export::ExportRequest;

use crate::error::ApiError;
use crate::AppState;

/// Get the export request for the currently visible rows (JSON API)
pub async fn api_export(State(state): State<AppState>) -> Result<Json<ExportRequest>, ApiError> {
    let request = state.dashboard.export_request_at(Utc::now())?;
    log::info!(
        "export requested: {} ({} rows)",
        request.file_name,
        request.rows.len()
    );
    Ok(Json(request))
}
