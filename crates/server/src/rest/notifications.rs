use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, NotificationResponse};

use crate::auth::extractors::AuthRequired;
use crate::repo::notification;

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Newest notifications first", body = Vec<NotificationResponse>),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn list_notifications(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let rows = notification::list_by_user(&pool, auth.0.sub).await?;
    Ok(Json(rows.into_iter().map(NotificationResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    params(("id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 400, description = "Malformed id", body = AppError),
        (status = 404, description = "No such notification for this caller", body = AppError)
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn mark_notification_read(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = super::parse_id(&id, "notification")?;
    if notification::mark_read(&pool, auth.0.sub, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Notification not found"))
    }
}
