use shared_types::{AppError, ChatMessage};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

const COLUMNS: &str = "id, user_id, sender_id, sender_name, body, created_at";
const THREAD_LIMIT: i64 = 200;

/// Append to the thread owned by `thread_owner`.
pub async fn create(
    pool: &Pool<Postgres>,
    thread_owner: i64,
    sender_id: i64,
    sender_name: &str,
    body: &str,
) -> Result<ChatMessage, AppError> {
    sqlx::query_as::<_, ChatMessage>(&format!(
        "INSERT INTO chat_messages (user_id, sender_id, sender_name, body)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    ))
    .bind(thread_owner)
    .bind(sender_id)
    .bind(sender_name)
    .bind(body)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// The latest messages of a thread, oldest first.
pub async fn list_thread(pool: &Pool<Postgres>, thread_owner: i64) -> Result<Vec<ChatMessage>, AppError> {
    sqlx::query_as::<_, ChatMessage>(&format!(
        "SELECT {COLUMNS} FROM (
             SELECT {COLUMNS} FROM chat_messages
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2
         ) latest
         ORDER BY created_at ASC, id ASC"
    ))
    .bind(thread_owner)
    .bind(THREAD_LIMIT)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
