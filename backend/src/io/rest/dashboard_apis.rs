use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::HealthResponse;
use tracing::info;

use crate::io::rest::error_response;
use crate::io::rest::mappers::dashboard_mapper::DashboardMapper;
use crate::AppState;

/// Create a router for dashboard related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/data", get(get_dashboard))
        .route("/health", get(health))
}

/// Greeting, quote, date, both goal lists and their progress
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/data");

    match state.dashboard_service.get_dashboard().await {
        Ok(result) => {
            let response = DashboardMapper::to_dashboard_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
