use shared_types::{AppError, Notification};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const COLUMNS: &str = "id, user_id, title, body, read, created_at";
const LIST_LIMIT: i64 = 50;

pub async fn create(
    pool: &Pool<Postgres>,
    user_id: i64,
    title: &str,
    body: &str,
) -> Result<Notification, AppError> {
    sqlx::query_as::<_, Notification>(&format!(
        "INSERT INTO notifications (user_id, title, body) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
    ))
    .bind(user_id)
    .bind(title)
    .bind(body)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Most recent notifications for `user_id`, newest first.
pub async fn list_by_user(pool: &Pool<Postgres>, user_id: i64) -> Result<Vec<Notification>, AppError> {
    sqlx::query_as::<_, Notification>(&format!(
        "SELECT {COLUMNS} FROM notifications
         WHERE user_id = $1
         ORDER BY created_at DESC, id DESC
         LIMIT $2"
    ))
    .bind(user_id)
    .bind(LIST_LIMIT)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Returns false when no notification with `id` belongs to `user_id`.
pub async fn mark_read(pool: &Pool<Postgres>, user_id: i64, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected() > 0)
}
