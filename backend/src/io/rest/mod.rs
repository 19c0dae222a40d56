//! # REST API Interface Layer
//!
//! JSON endpoints of the goal dashboard, all mounted under `/api`:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/data` | [`dashboard_apis::get_dashboard`] |
//! | GET | `/api/health` | [`dashboard_apis::health`] |
//! | POST | `/api/add-goal` | [`goal_apis::add_goal`] |
//! | POST | `/api/toggle/:goal_id` | [`goal_apis::toggle_goal`] |
//! | POST | `/api/delete/:goal_id` | [`goal_apis::delete_goal`] |
//!
//! Domain errors are translated here: validation failures become 400, a
//! missing goal 404 and storage failures 500, always with an
//! `{"error": "..."}` body. Requests the extractors refuse (bad JSON, wrong
//! content type, non-numeric ids) keep axum's status but get the same body.

pub mod dashboard_apis;
pub mod goal_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::models::goal::GoalError;
use crate::AppState;

/// All API routes, relative to `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(dashboard_apis::router())
        .merge(goal_apis::router())
}

pub fn status_for(error: &GoalError) -> StatusCode {
    match error {
        GoalError::EmptyText | GoalError::UnknownType(_) => StatusCode::BAD_REQUEST,
        GoalError::NotFound(_) => StatusCode::NOT_FOUND,
        GoalError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a domain error as a JSON error response
pub fn error_response(error: GoalError) -> Response {
    let status = status_for(&error);
    match &error {
        GoalError::Storage(e) => error!("Goal storage failure: {}", e),
        GoalError::NotFound(id) => warn!("Goal {} not found", id),
        _ => warn!("Rejected goal request: {}", error),
    }
    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}

/// Render an extractor rejection with the status axum chose for it
pub fn rejection_response(status: StatusCode, reason: String) -> Response {
    warn!("Rejected malformed request ({}): {}", status, reason);
    (status, Json(ErrorResponse::new(reason))).into_response()
}
