use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::inbound::http::router::AppState;

pub async fn add_employee(
    State(state): State<AppState>,
    Json(body): Json<AddEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let command = CreateEmployeeCommand::new(body.name, body.position)?;

    state
        .employee_service
        .add_employee(command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddEmployeeRequest {
    name: String,
    position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeData {
    pub id: String,
    pub name: String,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            created_at: employee.created_at,
        }
    }
}
