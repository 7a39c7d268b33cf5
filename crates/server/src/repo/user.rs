use shared_types::{AppError, AuthUser};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Full `users` row. The password hash never leaves the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

impl From<UserRow> for AuthUser {
    fn from(u: UserRow) -> Self {
        AuthUser {
            id: u.id,
            username: u.username,
            display_name: u.display_name,
            email: u.email,
            role: u.role,
            avatar_url: u.avatar_url,
        }
    }
}

const COLUMNS: &str = "id, username, email, password_hash, display_name, role, avatar_url";

/// Insert a student account. Duplicate email or username is a `Conflict`.
pub async fn create_student(
    pool: &Pool<Postgres>,
    username: &str,
    email: &str,
    password_hash: &str,
    display_name: &str,
) -> Result<UserRow, AppError> {
    sqlx::query_as::<_, UserRow>(&format!(
        "INSERT INTO users (username, email, password_hash, display_name, role)
         VALUES ($1, $2, $3, $4, 'student')
         RETURNING {COLUMNS}"
    ))
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(display_name)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Email lookup is case-insensitive.
pub async fn find_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<UserRow>, AppError> {
    sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {COLUMNS} FROM users WHERE lower(email) = lower($1)"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<UserRow>, AppError> {
    sqlx::query_as::<_, UserRow>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}
