use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, UserRole};

use super::jwt::Claims;

/// Rejects with 401 unless the auth middleware resolved a session.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

pub const ROLE_STUDENT: u8 = 1;

fn required_role(role: u8) -> UserRole {
    match role {
        ROLE_STUDENT => UserRole::Student,
        _ => UserRole::Guest,
    }
}

/// Check a role claim against a requirement: 403 when it does not satisfy it.
pub fn check_role(claims: &Claims, required: UserRole) -> Result<(), AppError> {
    let role = UserRole::from_str_or_default(&claims.role);
    if role.satisfies(&required) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "This area is for {} accounts",
            required.as_str()
        )))
    }
}

/// 401 without a session, 403 when the session's role does not satisfy
/// `ROLE` (see [`ROLE_STUDENT`]).
pub struct RoleRequired<const ROLE: u8>(pub Claims);

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthRequired(claims) = AuthRequired::from_request_parts(parts, state).await?;
        check_role(&claims, required_role(ROLE))?;
        Ok(RoleRequired(claims))
    }
}

pub type StudentRequired = RoleRequired<ROLE_STUDENT>;
