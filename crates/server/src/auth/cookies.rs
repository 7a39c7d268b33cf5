use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "sl_access";
pub const REFRESH_COOKIE: &str = "sl_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

/// HTTP-only, SameSite=Lax cookie scoped to the whole site.
fn auth_cookie(name: &'static str, value: &str, max_age_seconds: i64) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .secure(cookie_secure());
    if let Some(domain) = cookie_domain() {
        builder = builder.domain(domain);
    }
    builder.build()
}

fn to_header(cookie: Cookie<'_>) -> Option<HeaderValue> {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(name = cookie.name(), error = %e, "unencodable cookie dropped");
            None
        }
    }
}

pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> Option<HeaderValue> {
    to_header(auth_cookie(ACCESS_COOKIE, token, max_age_minutes * 60))
}

pub fn build_refresh_cookie(token: &str, max_age_days: i64) -> Option<HeaderValue> {
    to_header(auth_cookie(REFRESH_COOKIE, token, max_age_days * 86_400))
}

/// Expired, empty versions of both auth cookies.
pub fn build_clear_cookies() -> Vec<HeaderValue> {
    [ACCESS_COOKIE, REFRESH_COOKIE]
        .into_iter()
        .filter_map(|name| to_header(auth_cookie(name, "", 0)))
        .collect()
}

/// Access token from the `sl_access` cookie, else from `Authorization: Bearer`.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Append both auth cookies using the configured token lifetimes.
pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    let cookies = [
        build_access_cookie(access_token, jwt::access_token_expiry_minutes()),
        build_refresh_cookie(refresh_token, jwt::refresh_token_expiry_days()),
    ];
    for value in cookies.into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    for value in build_clear_cookies() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the auth
/// middleware once the response exists.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Per-request slot the middleware inserts into request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return;
    };
    let parts = ctx.parts_mut();
    match parts.extensions.get::<CookieSlot>() {
        Some(slot) => slot.put(action),
        None => tracing::warn!("no cookie slot on request; auth middleware not installed?"),
    }
}

/// Ask the middleware to set both auth cookies on this response.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Ask the middleware to expire both auth cookies on this response.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}
