use dioxus::prelude::*;
use shared_types::StudentDashboard;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_student_dashboard() -> Result<StudentDashboard, ServerFnError> {
    use crate::repo::maintenance_request;

    let claims = require_student()?;
    let pool = db().await?;
    maintenance_request::dashboard_counts(pool, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}
