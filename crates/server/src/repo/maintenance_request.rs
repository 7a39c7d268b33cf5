use shared_types::{AppError, CreateMaintenanceRequest, MaintenanceRequest, StudentDashboard};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const COLUMNS: &str = "id, user_id, title, description, status, priority, created_at";

/// File a request for `user_id`. Status starts as `pending`.
pub async fn create(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: &CreateMaintenanceRequest,
) -> Result<MaintenanceRequest, AppError> {
    sqlx::query_as::<_, MaintenanceRequest>(&format!(
        "INSERT INTO maintenance_requests (user_id, title, description, priority)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    ))
    .bind(user_id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.priority)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Requests owned by `user_id`, newest first.
pub async fn list_by_user(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<Vec<MaintenanceRequest>, AppError> {
    sqlx::query_as::<_, MaintenanceRequest>(&format!(
        "SELECT {COLUMNS} FROM maintenance_requests
         WHERE user_id = $1
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// A single request, only if `user_id` owns it.
pub async fn find_for_user(
    pool: &Pool<Postgres>,
    user_id: i64,
    id: Uuid,
) -> Result<Option<MaintenanceRequest>, AppError> {
    sqlx::query_as::<_, MaintenanceRequest>(&format!(
        "SELECT {COLUMNS} FROM maintenance_requests WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Dashboard counts for one student.
pub async fn dashboard_counts(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<StudentDashboard, AppError> {
    let (open_maintenance, completed_maintenance, unread_notifications) =
        sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT
                (SELECT COUNT(*) FROM maintenance_requests
                  WHERE user_id = $1 AND status IN ('pending', 'in_progress')),
                (SELECT COUNT(*) FROM maintenance_requests
                  WHERE user_id = $1 AND status = 'completed'),
                (SELECT COUNT(*) FROM notifications
                  WHERE user_id = $1 AND NOT read)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(StudentDashboard {
        open_maintenance,
        completed_maintenance,
        unread_notifications,
    })
}
