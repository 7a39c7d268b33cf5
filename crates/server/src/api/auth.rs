// Session helpers used by every server function.

use dioxus::prelude::*;
use shared_types::{AppError, UserRole};
use sqlx::{Pool, Postgres};

use crate::auth::{cookies, extractors, jwt};
use crate::db::get_db;
use crate::error_convert::AppErrorExt;

/// Pool for server functions, with failures already in transport form.
pub(crate) async fn db() -> Result<&'static Pool<Postgres>, ServerFnError> {
    get_db().await.map_err(AppErrorExt::into_server_fn_error)
}

/// Claims of the caller, if any. The auth middleware normally resolved them
/// already; otherwise the access token is read straight from the request.
pub(crate) fn current_claims() -> Option<jwt::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }
    let token = cookies::extract_access_token(&parts.headers)?;
    jwt::validate_access_token(&token).ok()
}

pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Signed-in student, else 401 or 403.
pub(crate) fn require_student() -> Result<jwt::Claims, ServerFnError> {
    let claims = require_auth()?;
    extractors::check_role(&claims, UserRole::Student).map_err(AppErrorExt::into_server_fn_error)?;
    Ok(claims)
}
