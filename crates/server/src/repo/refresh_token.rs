use chrono::{DateTime, Utc};
use shared_types::AppError;
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

pub async fn insert(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Id of the stored token when it is neither revoked nor expired.
pub async fn find_active(
    pool: &Pool<Postgres>,
    token_hash: &str,
    user_id: i64,
) -> Result<Option<i64>, AppError> {
    sqlx::query_scalar::<_, i64>(
        "SELECT id FROM refresh_tokens
         WHERE token_hash = $1 AND user_id = $2 AND NOT revoked AND expires_at > NOW()",
    )
    .bind(token_hash)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn revoke(pool: &Pool<Postgres>, id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Sign the user out everywhere. Returns how many tokens were revoked.
pub async fn revoke_all_for_user(pool: &Pool<Postgres>, user_id: i64) -> Result<u64, AppError> {
    let result =
        sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND NOT revoked")
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected())
}
