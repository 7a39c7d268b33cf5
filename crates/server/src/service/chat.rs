use shared_types::{AppError, ChatMessage, SendChatMessage};
use sqlx::{Pool, Postgres};

use crate::error_convert::ValidateRequest;
use crate::repo::{chat_message, user};

/// Post into the caller's own support thread under their display name.
pub async fn send_own(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: &SendChatMessage,
) -> Result<ChatMessage, AppError> {
    let body = checked_message(req)?.body;
    let sender = user::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;
    chat_message::create(pool, user_id, user_id, &sender.display_name, &body).await
}

/// Trimmed copy of `req`. Blank is a bad request; over-long is a field error.
pub fn checked_message(req: &SendChatMessage) -> Result<SendChatMessage, AppError> {
    if req.is_blank() {
        return Err(AppError::bad_request("Message cannot be empty"));
    }
    let req = req.trimmed();
    req.validate_request()?;
    Ok(req)
}
