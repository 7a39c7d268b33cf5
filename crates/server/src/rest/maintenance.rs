use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, CreateMaintenanceRequest, MaintenanceRequestResponse};

use crate::auth::extractors::StudentRequired;
use crate::repo::maintenance_request;
use crate::service::maintenance;

// ---------------------------------------------------------------------------
// GET /api/maintenance-requests
// ---------------------------------------------------------------------------

/// The caller's maintenance requests, newest first.
#[utoipa::path(
    get,
    path = "/api/maintenance-requests",
    responses(
        (status = 200, description = "Requests owned by the caller", body = Vec<MaintenanceRequestResponse>),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not a student", body = AppError)
    ),
    tag = "maintenance",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn list_maintenance_requests(
    State(pool): State<Pool<Postgres>>,
    auth: StudentRequired,
) -> Result<Json<Vec<MaintenanceRequestResponse>>, AppError> {
    let rows = maintenance_request::list_by_user(&pool, auth.0.sub).await?;
    Ok(Json(rows.into_iter().map(MaintenanceRequestResponse::from).collect()))
}

// ---------------------------------------------------------------------------
// POST /api/maintenance-requests
// ---------------------------------------------------------------------------

/// File a request. The owner is always the caller.
#[utoipa::path(
    post,
    path = "/api/maintenance-requests",
    request_body = CreateMaintenanceRequest,
    responses(
        (status = 201, description = "Request filed", body = MaintenanceRequestResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not a student", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "maintenance",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth, body))]
pub async fn create_maintenance_request(
    State(pool): State<Pool<Postgres>>,
    auth: StudentRequired,
    Json(body): Json<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceRequestResponse>), AppError> {
    let created = maintenance::file_request(&pool, auth.0.sub, &body).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

// ---------------------------------------------------------------------------
// GET /api/maintenance-requests/{id}
// ---------------------------------------------------------------------------

/// Someone else's request is reported as missing.
#[utoipa::path(
    get,
    path = "/api/maintenance-requests/{id}",
    params(("id" = String, Path, description = "Request UUID")),
    responses(
        (status = 200, description = "The request", body = MaintenanceRequestResponse),
        (status = 400, description = "Malformed id", body = AppError),
        (status = 404, description = "No such request for this caller", body = AppError)
    ),
    tag = "maintenance",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn get_maintenance_request(
    State(pool): State<Pool<Postgres>>,
    auth: StudentRequired,
    Path(id): Path<String>,
) -> Result<Json<MaintenanceRequestResponse>, AppError> {
    let id = super::parse_id(&id, "request")?;
    maintenance_request::find_for_user(&pool, auth.0.sub, id)
        .await?
        .map(|r| Json(r.into()))
        .ok_or_else(|| AppError::not_found("Maintenance request not found"))
}
