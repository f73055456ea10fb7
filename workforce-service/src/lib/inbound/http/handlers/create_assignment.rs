use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::assignment::models::Assignment;
use crate::domain::assignment::models::CreateAssignmentCommand;
use crate::domain::identity::models::IdentityId;
use crate::inbound::http::router::AppState;

pub async fn create_assignment(
    State(state): State<AppState>,
    Json(body): Json<CreateAssignmentRequest>,
) -> Result<ApiSuccess<AssignmentData>, ApiError> {
    let user_id = IdentityId::from_string(&body.user_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command =
        CreateAssignmentCommand::new(user_id, body.title, body.description.unwrap_or_default())?;

    state
        .assignment_service
        .create_assignment(command)
        .await
        .map_err(ApiError::from)
        .map(|ref assignment| ApiSuccess::new(StatusCode::CREATED, assignment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAssignmentRequest {
    user_id: String,
    title: String,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Assignment> for AssignmentData {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id.to_string(),
            user_id: assignment.user_id.to_string(),
            title: assignment.title.clone(),
            description: assignment.description.clone(),
            created_at: assignment.created_at,
        }
    }
}
