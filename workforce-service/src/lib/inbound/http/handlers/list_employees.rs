use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::add_employee::EmployeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::models::PageRequest;
use crate::inbound::http::router::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    let page = PageRequest::new(query.page, query.limit);

    state
        .employee_service
        .list_employees(page)
        .await
        .map_err(ApiError::from)
        .map(|employees| {
            ApiSuccess::new(
                StatusCode::OK,
                employees.iter().map(EmployeeData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListEmployeesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
