use dioxus::prelude::*;
use shared_types::NotificationResponse;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_notifications() -> Result<Vec<NotificationResponse>, ServerFnError> {
    use crate::repo::notification;

    let claims = require_auth()?;
    let pool = db().await?;
    let rows = notification::list_by_user(pool, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(rows.into_iter().map(NotificationResponse::from).collect())
}

/// Mark one of the caller's notifications as read.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn mark_notification_read(id: String) -> Result<(), ServerFnError> {
    use crate::repo::notification;
    use shared_types::AppError;

    let claims = require_auth()?;
    let id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid notification id").into_server_fn_error())?;
    let pool = db().await?;
    let updated = notification::mark_read(pool, claims.sub, id)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    if !updated {
        return Err(AppError::not_found("Notification not found").into_server_fn_error());
    }
    Ok(())
}
