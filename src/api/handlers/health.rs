use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

const SERVICE_NAME: &str = "image_catalog";
const READINESS_TIMEOUT: Duration = Duration::from_secs(2);

/// Liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Readiness response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    /// `connected`, `disconnected`, `timeout` or `not_migrated`
    pub database: String,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReadinessResponse {
    fn new(database: &'static str, started: Instant, error: Option<String>) -> Self {
        Self {
            status: if error.is_none() { "ready" } else { "not_ready" }.to_string(),
            service: SERVICE_NAME.to_string(),
            database: database.to_string(),
            response_time_ms: started.elapsed().as_millis() as u64,
            error,
        }
    }
}

/// Short, credential-free description of a database error
pub fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Io(_) => "Database connection error",
        sqlx::Error::Tls(_) => "Database TLS error",
        sqlx::Error::PoolTimedOut => "Database pool timeout",
        sqlx::Error::PoolClosed => "Database pool closed",
        sqlx::Error::Protocol(_) => "Database protocol error",
        _ => "Database error",
    }
}

/// GET /health
/// Liveness only; never touches the database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
/// Ready once the database answers and the items table exists
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable and migrated", body = ReadinessResponse),
        (status = 503, description = "Database unreachable or not migrated", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(pool): State<Arc<PgPool>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let started = Instant::now();

    let check = tokio::time::timeout(
        READINESS_TIMEOUT,
        sqlx::query_scalar::<_, bool>("SELECT to_regclass('example_items') IS NOT NULL")
            .fetch_one(pool.as_ref()),
    )
    .await;

    let response = match check {
        Ok(Ok(true)) => ReadinessResponse::new("connected", started, None),
        Ok(Ok(false)) => ReadinessResponse::new(
            "not_migrated",
            started,
            Some("Table example_items does not exist".to_string()),
        ),
        Ok(Err(e)) => ReadinessResponse::new(
            "disconnected",
            started,
            Some(sanitize_db_error(&e).to_string()),
        ),
        Err(_) => ReadinessResponse::new(
            "timeout",
            started,
            Some(format!(
                "Database query timed out after {:?}",
                READINESS_TIMEOUT
            )),
        ),
    };

    let status = if response.error.is_none() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
