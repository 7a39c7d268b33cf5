use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthResponse, AuthUser, ChatMessageResponse, CreateMaintenanceRequest,
    LoginRequest, MaintenanceRequestResponse, NotificationResponse, RegisterRequest,
    SendChatMessage,
};
use sqlx::{Pool, Postgres};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health::{self, HealthResponse};
use crate::rest;

/// Registers the `bearer_auth` scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::auth::register,
        rest::auth::login,
        rest::auth::logout,
        rest::auth::me,
        rest::maintenance::list_maintenance_requests,
        rest::maintenance::create_maintenance_request,
        rest::maintenance::get_maintenance_request,
        rest::notifications::list_notifications,
        rest::notifications::mark_notification_read,
        rest::chat::list_chat_messages,
        rest::chat::send_chat_message,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthResponse,
        AuthUser,
        LoginRequest,
        RegisterRequest,
        MaintenanceRequestResponse,
        CreateMaintenanceRequest,
        NotificationResponse,
        ChatMessageResponse,
        SendChatMessage,
        HealthResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Sign-up, sign-in and session endpoints"),
        (name = "maintenance", description = "Student maintenance requests"),
        (name = "notifications", description = "Per-user notifications"),
        (name = "chat", description = "Student support thread"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Student Living API",
        description = "Student housing portal API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// REST API under `/api`, the health check, and API docs at `/docs`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
