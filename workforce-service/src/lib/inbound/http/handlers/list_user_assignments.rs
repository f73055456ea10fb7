use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_assignment::AssignmentData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::IdentityId;
use crate::inbound::http::router::AppState;

pub async fn list_user_assignments(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<Vec<AssignmentData>>, ApiError> {
    let user_id =
        IdentityId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // 404 on an unknown identity rather than an empty list.
    state
        .identity_service
        .get_identity(&user_id)
        .await
        .map_err(ApiError::from)?;

    state
        .assignment_service
        .list_for_identity(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|assignments| {
            ApiSuccess::new(
                StatusCode::OK,
                assignments.iter().map(AssignmentData::from).collect(),
            )
        })
}
