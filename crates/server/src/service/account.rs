use shared_types::{AppError, LoginRequest, RegisterRequest};
use sqlx::{Pool, Postgres};

use crate::auth::{jwt, password};
use crate::error_convert::ValidateRequest;
use crate::repo::{refresh_token, user::{self, UserRow}};

/// Access and refresh token for a freshly signed-in user.
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Create a student account when self sign-up is open.
pub async fn register_student(
    pool: &Pool<Postgres>,
    req: &RegisterRequest,
    open_registration: bool,
) -> Result<UserRow, AppError> {
    if !open_registration {
        return Err(AppError::forbidden("Registration is closed"));
    }
    req.validate_request()?;

    let hash = password::hash_password(&req.password).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        AppError::internal("Could not create account")
    })?;

    let created = user::create_student(
        pool,
        req.username.trim(),
        req.email.trim(),
        &hash,
        req.display_name.trim(),
    )
    .await?;
    tracing::info!(user_id = created.id, "student registered");
    Ok(created)
}

/// Check credentials. Unknown email and wrong password look the same.
pub async fn authenticate(pool: &Pool<Postgres>, req: &LoginRequest) -> Result<UserRow, AppError> {
    req.validate_request()?;

    let invalid = || AppError::unauthorized("Invalid email or password");
    let found = user::find_by_email(pool, req.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let ok = password::verify_password(&req.password, &found.password_hash).map_err(|e| {
        tracing::error!(user_id = found.id, error = %e, "stored password hash is unreadable");
        AppError::internal("Could not sign in")
    })?;
    if !ok {
        tracing::info!(user_id = found.id, "failed sign-in");
        return Err(invalid());
    }
    Ok(found)
}

/// Mint a token pair and remember the refresh token's hash.
pub async fn issue_tokens(pool: &Pool<Postgres>, who: &UserRow) -> Result<IssuedTokens, AppError> {
    let token_error = |e: jsonwebtoken::errors::Error| {
        tracing::error!(error = %e, "token creation failed");
        AppError::internal("Could not start a session")
    };
    let access_token = jwt::create_access_token(who.id, &who.email, &who.role).map_err(token_error)?;
    let (refresh_token, expires_at) =
        jwt::create_refresh_token(who.id, &who.email, &who.role).map_err(token_error)?;

    refresh_token::insert(pool, who.id, &jwt::hash_token(&refresh_token), expires_at).await?;

    Ok(IssuedTokens {
        access_token,
        refresh_token,
    })
}

/// Revoke every refresh token the user holds.
pub async fn end_sessions(pool: &Pool<Postgres>, user_id: i64) -> Result<(), AppError> {
    let revoked = refresh_token::revoke_all_for_user(pool, user_id).await?;
    tracing::info!(user_id, revoked, "signed out");
    Ok(())
}
