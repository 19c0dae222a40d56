//! # REST API for Goal Management
//!
//! Endpoints for adding, toggling and deleting goals.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use shared::{AddGoalRequest, SuccessResponse};
use tracing::info;

use crate::domain::models::goal::GoalError;
use crate::io::rest::{error_response, rejection_response};
use crate::io::rest::mappers::goal_mapper::GoalMapper;
use crate::AppState;

/// Create a router for goal related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-goal", post(add_goal))
        .route("/toggle/:goal_id", post(toggle_goal))
        .route("/delete/:goal_id", post(delete_goal))
}

/// Add a goal to the weekly (default) or daily list
pub async fn add_goal(
    State(state): State<AppState>,
    payload: Result<Json<AddGoalRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };
    info!("POST /api/add-goal - request: {:?}", request);

    let command = GoalMapper::to_add_goal_command(request);

    match state.goal_service.create_goal(command).await {
        Ok(goal) => (StatusCode::OK, Json(GoalMapper::to_add_goal_response(goal))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Flip the completion flag of a goal
pub async fn toggle_goal(
    State(state): State<AppState>,
    goal_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(goal_id) = match goal_id {
        Ok(goal_id) => goal_id,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };
    info!("POST /api/toggle/{}", goal_id);

    match state.goal_service.toggle_goal(goal_id).await {
        Ok(true) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Ok(false) => error_response(GoalError::NotFound(goal_id)),
        Err(e) => error_response(e),
    }
}

/// Delete a goal; deleting an unknown id still succeeds
pub async fn delete_goal(
    State(state): State<AppState>,
    goal_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(goal_id) = match goal_id {
        Ok(goal_id) => goal_id,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };
    info!("POST /api/delete/{}", goal_id);

    match state.goal_service.delete_goal(goal_id).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => error_response(e),
    }
}
