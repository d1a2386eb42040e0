//! Filter criteria endpoints - mutators and resets
//!
//! Mutators accept their value in query params, a form body, or a bare
//! body, and respond with the updated criteria so the client can stay in
//! sync without a second request.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use paydash_core::{CardType, DateRange, FilterCriteria, PaymentMethod, TransactionPeriod};
use serde::Serialize;
use std::collections::HashMap;

use super::param;
use crate::error::ApiError;
use crate::AppState;

/// Current criteria plus the active display label
#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub criteria: FilterCriteria,
    pub label: String,
}

fn criteria_response(state: &AppState) -> Json<FiltersResponse> {
    Json(FiltersResponse {
        criteria: state.dashboard.criteria(),
        label: state.dashboard.period_label_at(Utc::now()),
    })
}

fn require(
    query: &HashMap<String, String>,
    body: &str,
    key: &str,
) -> Result<String, ApiError> {
    param(query, body, key)
        .ok_or_else(|| ApiError::bad_request(format!("Missing parameter: {}", key)))
}

/// Get the current criteria (JSON API)
pub async fn api_filters(State(state): State<AppState>) -> Json<FiltersResponse> {
    criteria_response(&state)
}

/// Set the rolling period
pub async fn api_set_period(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<Json<FiltersResponse>, ApiError> {
    let value = require(&query, &body, "value")?;
    let period: TransactionPeriod = value.parse().map_err(ApiError::bad_request)?;
    state.dashboard.set_period(period);
    Ok(criteria_response(&state))
}

/// Toggle a card brand in the selection
pub async fn api_toggle_card(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<Json<FiltersResponse>, ApiError> {
    let value = require(&query, &body, "value")?;
    let card: CardType = value.parse().map_err(ApiError::bad_request)?;
    state.dashboard.toggle_card(card);
    Ok(criteria_response(&state))
}

/// Clear the card selection
pub async fn api_reset_cards(State(state): State<AppState>) -> Json<FiltersResponse> {
    state.dashboard.reset_cards();
    criteria_response(&state)
}

/// Toggle a payment method in the selection
pub async fn api_toggle_method(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<Json<FiltersResponse>, ApiError> {
    let value = require(&query, &body, "value")?;
    let method: PaymentMethod = value.parse().map_err(ApiError::bad_request)?;
    state.dashboard.toggle_method(method);
    Ok(criteria_response(&state))
}

/// Clear the payment method selection
pub async fn api_reset_methods(State(state): State<AppState>) -> Json<FiltersResponse> {
    state.dashboard.reset_methods();
    criteria_response(&state)
}

/// Toggle an installment count in the selection
pub async fn api_toggle_installment(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<Json<FiltersResponse>, ApiError> {
    let value = require(&query, &body, "value")?;
    let installments: u32 = value
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid installment count: {}", value)))?;
    state.dashboard.toggle_installment(installments);
    Ok(criteria_response(&state))
}

/// Clear the installment selection
pub async fn api_reset_installments(State(state): State<AppState>) -> Json<FiltersResponse> {
    state.dashboard.reset_installments();
    criteria_response(&state)
}

/// Set the explicit date range. `from` is required, `to` optional.
pub async fn api_set_dates(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Result<Json<FiltersResponse>, ApiError> {
    let from = require(&query, &body, "from")?;
    let from = parse_date(&from)?;
    let to = match param(&query, &body, "to") {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };

    state.dashboard.set_dates(Some(DateRange::new(Some(from), to)));
    Ok(criteria_response(&state))
}

/// Drop the explicit date range
pub async fn api_reset_dates(State(state): State<AppState>) -> Json<FiltersResponse> {
    state.dashboard.reset_dates();
    criteria_response(&state)
}

/// Set the amount range. An endpoint that fails to parse keeps its
/// previous valid value; endpoints are clamped to the configured bounds.
pub async fn api_set_amount_range(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Json<FiltersResponse> {
    let (current_min, current_max) = state.dashboard.criteria().amount_range;

    let min = param(&query, &body, "min")
        .and_then(|s| s.parse().ok())
        .unwrap_or(current_min);
    let max = param(&query, &body, "max")
        .and_then(|s| s.parse().ok())
        .unwrap_or(current_max);

    state.dashboard.set_amount_range(min, max);
    criteria_response(&state)
}

/// Restore the amount range to the configured bounds
pub async fn api_reset_amount_range(State(state): State<AppState>) -> Json<FiltersResponse> {
    state.dashboard.reset_amount_range();
    criteria_response(&state)
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request(format!("Invalid date: {}", raw)))
}
