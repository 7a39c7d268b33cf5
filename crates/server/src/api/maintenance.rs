use dioxus::prelude::*;
use shared_types::MaintenanceRequestResponse;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

/// The caller's maintenance requests, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_maintenance_requests() -> Result<Vec<MaintenanceRequestResponse>, ServerFnError> {
    use crate::repo::maintenance_request;

    let claims = require_student()?;
    let pool = db().await?;
    let rows = maintenance_request::list_by_user(pool, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(rows.into_iter().map(MaintenanceRequestResponse::from).collect())
}

/// File a request owned by the caller.
#[cfg_attr(feature = "server", tracing::instrument(skip(description)))]
#[server]
pub async fn create_maintenance_request(
    title: String,
    description: String,
    priority: String,
) -> Result<MaintenanceRequestResponse, ServerFnError> {
    use crate::service::maintenance;
    use shared_types::CreateMaintenanceRequest;

    let claims = require_student()?;
    let pool = db().await?;
    let req = CreateMaintenanceRequest {
        title,
        description,
        priority,
    };
    let created = maintenance::file_request(pool, claims.sub, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(created.into())
}
