use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_employee::add_employee;
use super::handlers::create_assignment::create_assignment;
use super::handlers::list_assignments::list_assignments;
use super::handlers::list_employees::list_employees;
use super::handlers::list_user_assignments::list_user_assignments;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::assignment::ports::AssignmentServicePort;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::identity::ports::IdentityServicePort;

/// Shared application state.
///
/// Services are held as trait objects so the same router runs over the
/// Postgres adapters in production and the in-memory adapters in tests.
#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<dyn IdentityServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub assignment_service: Arc<dyn AssignmentServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    identity_service: Arc<dyn IdentityServicePort>,
    employee_service: Arc<dyn EmployeeServicePort>,
    assignment_service: Arc<dyn AssignmentServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        identity_service,
        employee_service,
        assignment_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id/assignments", get(list_user_assignments))
        .route("/api/employees", post(add_employee).get(list_employees))
        .route("/api/assignments", post(create_assignment).get(list_assignments))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
