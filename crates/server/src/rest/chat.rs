use axum::{extract::State, http::StatusCode, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, ChatMessageResponse, SendChatMessage};

use crate::auth::extractors::AuthRequired;
use crate::repo::chat_message;
use crate::service::chat;

#[utoipa::path(
    get,
    path = "/api/chat/messages",
    responses(
        (status = 200, description = "Caller's support thread, oldest first", body = Vec<ChatMessageResponse>),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn list_chat_messages(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
) -> Result<Json<Vec<ChatMessageResponse>>, AppError> {
    let rows = chat_message::list_thread(&pool, auth.0.sub).await?;
    Ok(Json(rows.into_iter().map(ChatMessageResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/chat/messages",
    request_body = SendChatMessage,
    responses(
        (status = 201, description = "Message sent", body = ChatMessageResponse),
        (status = 400, description = "Empty message", body = AppError),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 422, description = "Message too long", body = AppError)
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, auth, body))]
pub async fn send_chat_message(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
    Json(body): Json<SendChatMessage>,
) -> Result<(StatusCode, Json<ChatMessageResponse>), AppError> {
    let sent = chat::send_own(&pool, auth.0.sub, &body).await?;
    Ok((StatusCode::CREATED, Json(sent.into())))
}
