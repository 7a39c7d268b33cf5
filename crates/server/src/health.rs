use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Call once at startup; uptime is measured from here.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// "ok" when the database answers, "degraded" otherwise.
    pub status: String,
    pub db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

fn build_response(db: Result<(), String>, uptime_seconds: u64) -> HealthResponse {
    let (status, db) = match db {
        Ok(()) => ("ok", "connected".to_string()),
        Err(e) => ("degraded", format!("error: {e}")),
    };
    HealthResponse {
        status: status.to_string(),
        db,
        uptime_seconds,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Liveness and database reachability", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let db = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::warn!(error = %e, "health check could not reach the database");
            e.to_string()
        });

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);
    Json(build_response(db, uptime))
}
