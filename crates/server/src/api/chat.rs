use dioxus::prelude::*;
use shared_types::ChatMessageResponse;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

/// The caller's support thread, oldest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_chat_messages() -> Result<Vec<ChatMessageResponse>, ServerFnError> {
    use crate::repo::chat_message;

    let claims = require_auth()?;
    let pool = db().await?;
    let rows = chat_message::list_thread(pool, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(rows.into_iter().map(ChatMessageResponse::from).collect())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn send_chat_message(body: String) -> Result<ChatMessageResponse, ServerFnError> {
    use crate::service::chat;
    use shared_types::SendChatMessage;

    let claims = require_auth()?;
    let pool = db().await?;
    let sent = chat::send_own(pool, claims.sub, &SendChatMessage { body })
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(sent.into())
}
