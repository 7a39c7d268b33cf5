use shared_types::{AppError, CreateMaintenanceRequest, MaintenanceRequest};
use sqlx::{Pool, Postgres};

use crate::error_convert::ValidateRequest;
use crate::repo::{maintenance_request, notification};

pub const RECEIVED_TITLE: &str = "Maintenance request received";

/// Validate and store a request for `user_id`, then let the student know it
/// arrived. The notification is best effort.
pub async fn file_request(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: &CreateMaintenanceRequest,
) -> Result<MaintenanceRequest, AppError> {
    let req = checked_request(req)?;

    let created = maintenance_request::create(pool, user_id, &req).await?;
    tracing::info!(user_id, request_id = %created.id, priority = %created.priority, "maintenance request filed");

    let body = format!("We have logged \"{}\" and will be in touch.", created.title);
    if let Err(e) = notification::create(pool, user_id, RECEIVED_TITLE, &body).await {
        tracing::warn!(user_id, request_id = %created.id, error = %e, "could not write confirmation notification");
    }

    Ok(created)
}

/// Trimmed copy of `req`, or the field errors that keep it from being filed.
pub fn checked_request(req: &CreateMaintenanceRequest) -> Result<CreateMaintenanceRequest, AppError> {
    let req = req.trimmed();
    req.validate_request()?;
    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    fn body(title: &str, description: &str, priority: &str) -> CreateMaintenanceRequest {
        CreateMaintenanceRequest {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
        }
    }

    #[test]
    fn whitespace_is_trimmed_before_storing() {
        let req = checked_request(&body("  Leaking tap ", " Drips\n", " high ")).unwrap();
        assert_eq!(req, body("Leaking tap", "Drips", "high"));
    }

    #[test]
    fn whitespace_only_title_is_a_field_error() {
        let err = checked_request(&body("   ", "Cold room", "low")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.len(), 1);
        assert!(err.field_errors.contains_key("title"));
    }

    #[test]
    fn unknown_priority_is_a_field_error() {
        let err = checked_request(&body("Heater", "Cold room", "urgent")).unwrap_err();
        assert!(err.field_errors.contains_key("priority"));
    }
}
