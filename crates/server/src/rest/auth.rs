use axum::{extract::State, http::StatusCode, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, AuthResponse, AuthUser, LoginRequest, RegisterRequest};

use crate::auth::extractors::AuthRequired;
use crate::repo::user;
use crate::service::account;

// ---------------------------------------------------------------------------
// POST /api/v1/auth/register
// ---------------------------------------------------------------------------

/// Create a student account. Only available while registration is open.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 403, description = "Registration is closed", body = AppError),
        (status = 409, description = "Email or username taken", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, payload))]
pub async fn register(
    State(pool): State<Pool<Postgres>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let open = crate::config::feature_flags().open_registration;
    let created = account::register_student(&pool, &payload, open).await?;
    let tokens = account::issue_tokens(&pool, &created).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: created.into(),
            access_token: tokens.access_token,
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /api/v1/auth/login
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 401, description = "Invalid email or password", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, payload))]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let found = account::authenticate(&pool, &payload).await?;
    let tokens = account::issue_tokens(&pool, &found).await?;
    Ok(Json(AuthResponse {
        user: found.into(),
        access_token: tokens.access_token,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/v1/auth/logout
// ---------------------------------------------------------------------------

/// Revoke every refresh token of the caller.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn logout(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
) -> Result<StatusCode, AppError> {
    account::end_sessions(&pool, auth.0.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /api/v1/auth/me
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current user", body = AuthUser),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn me(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
) -> Result<Json<AuthUser>, AppError> {
    let found = user::find_by_id(&pool, auth.0.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;
    Ok(Json(found.into()))
}
