//! HTTP API exposing the dashboard filter engine
//!
//! Routes are organized into modules:
//! - routes::transactions: Derived transaction views and metadata
//! - routes::filters: Criteria mutators and resets
//! - routes::export: Export request assembly

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use paydash_config::Config;
use paydash_core::Dashboard;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::export::api_export;
    use routes::filters::{
        api_filters, api_reset_amount_range, api_reset_cards, api_reset_dates,
        api_reset_installments, api_reset_methods, api_set_amount_range, api_set_dates,
        api_set_period, api_toggle_card, api_toggle_installment, api_toggle_method,
    };
    use routes::transactions::{
        api_base_transactions, api_metadata, api_reload, api_transactions,
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/base", get(api_base_transactions))
        .route("/api/metadata", get(api_metadata))
        .route("/api/filters", get(api_filters))
        .route("/api/filters/period", post(api_set_period))
        .route("/api/filters/cards/toggle", post(api_toggle_card))
        .route("/api/filters/cards", delete(api_reset_cards))
        .route("/api/filters/methods/toggle", post(api_toggle_method))
        .route("/api/filters/methods", delete(api_reset_methods))
        .route(
            "/api/filters/installments/toggle",
            post(api_toggle_installment),
        )
        .route("/api/filters/installments", delete(api_reset_installments))
        .route(
            "/api/filters/dates",
            put(api_set_dates).delete(api_reset_dates),
        )
        .route(
            "/api/filters/amount-range",
            put(api_set_amount_range).delete(api_reset_amount_range),
        )
        .route("/api/export", get(api_export))
        .route("/api/reload", post(api_reload))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: Config, dashboard: Arc<Dashboard>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { dashboard, config };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
