use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sqlx::{Pool, Postgres};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{self, hash_token, validate_access_token, validate_refresh_token};
use crate::repo::refresh_token;

/// Resolves the caller's session and manages auth cookies for every request.
///
/// A valid access token puts its `Claims` into request extensions. A missing
/// or expired one is replaced using the refresh cookie when possible. A
/// `CookieSlot` is inserted so server functions can set or clear cookies,
/// and whatever they scheduled is applied to the response.
///
/// Never rejects a request; handlers decide what needs a session.
pub async fn auth_middleware(
    State(pool): State<Pool<Postgres>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();

    let mut needs_refresh = true;
    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = validate_access_token(&token) {
            req.extensions_mut().insert(claims);
            needs_refresh = false;
        }
    }

    let mut rotated = None;
    if needs_refresh {
        if let Some(refresh) = cookies::extract_refresh_token(&headers) {
            rotated = try_transparent_refresh(&pool, &refresh, &mut req).await;
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some((access, refresh)) = rotated {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {}
    }

    response
}

/// Swap a still-valid refresh token for a new pair. The old token is revoked
/// so each refresh token works once.
async fn try_transparent_refresh(
    pool: &Pool<Postgres>,
    raw_refresh: &str,
    req: &mut Request,
) -> Option<(String, String)> {
    let claims = validate_refresh_token(raw_refresh).ok()?;

    let stored_id = match refresh_token::find_active(pool, &hash_token(raw_refresh), claims.sub).await {
        Ok(Some(id)) => id,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(user_id = claims.sub, error = %e, "refresh token lookup failed");
            return None;
        }
    };

    if let Err(e) = refresh_token::revoke(pool, stored_id).await {
        tracing::warn!(user_id = claims.sub, error = %e, "could not revoke rotated refresh token");
        return None;
    }

    let new_access = jwt::create_access_token(claims.sub, &claims.email, &claims.role).ok()?;
    let (new_refresh, expires_at) =
        jwt::create_refresh_token(claims.sub, &claims.email, &claims.role).ok()?;

    if let Err(e) = refresh_token::insert(pool, claims.sub, &hash_token(&new_refresh), expires_at).await {
        tracing::warn!(user_id = claims.sub, error = %e, "could not store rotated refresh token");
        return None;
    }

    let new_claims = validate_access_token(&new_access).ok()?;
    tracing::debug!(user_id = new_claims.sub, "session refreshed");
    req.extensions_mut().insert(new_claims);

    Some((new_access, new_refresh))
}
