pub mod auth;
pub mod chat;
pub mod maintenance;
pub mod notifications;

use axum::{routing::{get, post}, Router};
use shared_types::AppError;
use uuid::Uuid;

use crate::db::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route(
            "/api/maintenance-requests",
            get(maintenance::list_maintenance_requests).post(maintenance::create_maintenance_request),
        )
        .route("/api/maintenance-requests/{id}", get(maintenance::get_maintenance_request))
        .route("/api/notifications", get(notifications::list_notifications))
        .route("/api/notifications/{id}/read", post(notifications::mark_notification_read))
        .route("/api/chat/messages", get(chat::list_chat_messages).post(chat::send_chat_message))
}

/// Path ids arrive as text so a malformed one is a JSON 400, not axum's
/// plain-text rejection.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request(format!("Invalid {what} id")))
}
