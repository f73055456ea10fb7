use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workforce_service::config::Config;
use workforce_service::domain::assignment::service::AssignmentService;
use workforce_service::domain::employee::service::EmployeeService;
use workforce_service::domain::identity::service::IdentityService;
use workforce_service::inbound::http::router::create_router;
use workforce_service::outbound::repositories::PostgresAssignmentRepository;
use workforce_service::outbound::repositories::PostgresEmployeeRepository;
use workforce_service::outbound::repositories::PostgresIdentityRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workforce_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "workforce-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_secs = config.auth.token_ttl_secs,
        "Configuration loaded"
    );

    // Fail fast on a missing or empty signing secret; never serve with
    // weakly-signed tokens.
    let authenticator = Arc::new(
        Authenticator::new(
            config.auth.secret.as_bytes(),
            Duration::seconds(config.auth.token_ttl_secs),
        )
        .context("Signing secret misconfigured")?,
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let identity_repository = Arc::new(PostgresIdentityRepository::new(pg_pool.clone()));
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool.clone()));
    let assignment_repository = Arc::new(PostgresAssignmentRepository::new(pg_pool));

    let identity_service = Arc::new(IdentityService::new(
        identity_repository,
        Arc::clone(&authenticator),
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repository));
    let assignment_service = Arc::new(AssignmentService::new(assignment_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        identity_service,
        employee_service,
        assignment_service,
        authenticator,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
