use std::sync::Arc;

use auth::Authenticator;
use auth::TokenIssuer;
use chrono::Duration;
use serde_json::json;
use workforce_service::domain::assignment::service::AssignmentService;
use workforce_service::domain::employee::service::EmployeeService;
use workforce_service::domain::identity::service::IdentityService;
use workforce_service::inbound::http::router::create_router;
use workforce_service::outbound::repositories::InMemoryAssignmentRepository;
use workforce_service::outbound::repositories::InMemoryEmployeeRepository;
use workforce_service::outbound::repositories::InMemoryIdentityRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-signing-at-least-32-bytes";

/// Test application that spawns a real server over the in-memory store
/// adapters.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator =
            Arc::new(Authenticator::new(TEST_SECRET, Duration::hours(1)).unwrap());

        let identity_repo = Arc::new(InMemoryIdentityRepository::new());
        let employee_repo = Arc::new(InMemoryEmployeeRepository::new());
        let assignment_repo = Arc::new(InMemoryAssignmentRepository::new());

        let identity_service = Arc::new(IdentityService::new(
            identity_repo,
            Arc::clone(&authenticator),
        ));
        let employee_service = Arc::new(EmployeeService::new(employee_repo));
        let assignment_service = Arc::new(AssignmentService::new(assignment_repo));

        let router = create_router(
            identity_service,
            employee_service,
            assignment_service,
            authenticator,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an identity, returning its id from the response body.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_str().expect("Missing id").to_string()
    }

    /// Login, returning (token, subject_id).
    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        (
            body["data"]["token"]
                .as_str()
                .expect("Missing token")
                .to_string(),
            body["data"]["subject_id"]
                .as_str()
                .expect("Missing subject_id")
                .to_string(),
        )
    }

    /// Issue a token signed with the test secret but outside the login flow,
    /// e.g. one that is already expired.
    pub fn issue_token(&self, subject: &str, ttl: Duration) -> String {
        TokenIssuer::new(TEST_SECRET)
            .unwrap()
            .issue(subject, ttl)
            .unwrap()
    }
}
