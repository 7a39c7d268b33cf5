use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Map a sqlx error onto the shared error type. Constraint violations get
/// messages a user can act on; everything else is a generic database error.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => {
                let detail = db_err.message();
                let friendly = if detail.contains("email") {
                    "An account with this email already exists"
                } else if detail.contains("username") {
                    "This username is already taken"
                } else {
                    "A record with this value already exists"
                };
                AppError::conflict(friendly)
            }
            Some("23503") => AppError::bad_request("Referenced record does not exist"),
            Some("23514") => AppError::bad_request("Value is not allowed"),
            _ => {
                tracing::error!(error = %err, "database error");
                AppError::database("Database error")
            }
        },
        _ => {
            tracing::error!(error = %err, "database error");
            AppError::database("Database error")
        }
    }
}

/// Carry an `AppError` through a server function as JSON, so the client can
/// rebuild it with `AppError::from_server_error`.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// `validator` checks on request DTOs, reported as `AppError::validation`.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, LoginRequest, RegisterRequest};

    #[test]
    fn row_not_found_is_404() {
        assert_eq!(sqlx::Error::RowNotFound.into_app_error().kind, AppErrorKind::NotFound);
    }

    #[test]
    fn pool_errors_hide_details() {
        let err = sqlx::Error::PoolTimedOut.into_app_error();
        assert_eq!(err.kind, AppErrorKind::DatabaseError);
        assert_eq!(err.message, "Database error");
    }

    #[test]
    fn app_error_survives_server_fn_transport() {
        let sfe = AppError::forbidden("Students only").into_server_fn_error();
        let back = AppError::from_server_error(&sfe.to_string()).unwrap();
        assert_eq!(back.kind, AppErrorKind::Forbidden);
        assert_eq!(back.message, "Students only");
    }

    #[test]
    fn login_validation_reports_fields() {
        let err = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        }
        .validate_request()
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }

    #[test]
    fn register_validation_accepts_good_input() {
        let ok = RegisterRequest {
            username: "amara".into(),
            email: "amara@example.com".into(),
            password: "long-enough".into(),
            display_name: "Amara".into(),
        }
        .validate_request();
        assert!(ok.is_ok());
    }
}
