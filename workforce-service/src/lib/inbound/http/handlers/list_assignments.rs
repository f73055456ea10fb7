use axum::extract::State;
use axum::http::StatusCode;

use super::create_assignment::AssignmentData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_assignments(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AssignmentData>>, ApiError> {
    state
        .assignment_service
        .list_assignments()
        .await
        .map_err(ApiError::from)
        .map(|assignments| {
            ApiSuccess::new(
                StatusCode::OK,
                assignments.iter().map(AssignmentData::from).collect(),
            )
        })
}
