use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Broad class of a failure. Maps one-to-one onto an HTTP status code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    DatabaseError,
    Unauthorized,
    Forbidden,
    InternalError,
}

impl AppErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::DatabaseError => "DatabaseError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::InternalError => "InternalError",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::DatabaseError | AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error payload shared by the REST API, server functions and the UI.
///
/// Server functions carry it as JSON inside `ServerFnError`; the client
/// recovers it with [`AppError::from_server_error`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn of(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::DatabaseError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::of(AppErrorKind::InternalError, message)
    }

    /// Recover an `AppError` from `ServerFnError::to_string()` output.
    ///
    /// The transport wraps the payload, e.g.
    /// `error running server function: {"kind":"Forbidden",...} (details: None)`,
    /// so the outermost JSON object is cut out and parsed.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end <= start {
            return None;
        }
        serde_json::from_str(&error_message[start..=end]).ok()
    }

    /// Per-field messages carried by a server error, empty when there are none.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Message suitable for a toast or inline banner.
    pub fn friendly_message(error_string: &str) -> String {
        Self::from_server_error(error_string)
            .map(|e| e.message)
            .unwrap_or_else(|| "Something went wrong. Please try again.".to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|first| {
                    let msg = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    (field.to_string(), msg)
                })
            })
            .collect();
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.kind.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json() {
        let err = AppError::from_server_error(r#"{"kind":"Forbidden","message":"Students only"}"#)
            .unwrap();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert_eq!(err.message, "Students only");
    }

    #[test]
    fn parses_json_wrapped_by_transport() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Request not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Request not found");
    }

    #[test]
    fn garbage_is_not_an_app_error() {
        assert!(AppError::from_server_error("connection reset").is_none());
        assert!(AppError::from_server_error("}{").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_falls_back_to_generic_text() {
        assert_eq!(
            AppError::friendly_message(r#"{"kind":"Unauthorized","message":"Please sign in"}"#),
            "Please sign in"
        );
        assert_eq!(
            AppError::friendly_message("timeout"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn field_errors_survive_the_transport() {
        let mut fields = HashMap::new();
        fields.insert("title".to_string(), "Title is required".to_string());
        let json = serde_json::to_string(&AppError::validation("Validation failed", fields)).unwrap();
        let wrapped = format!("error running server function: {json} (details: None)");

        let parsed = AppError::parse_field_errors(&wrapped);
        assert_eq!(parsed.get("title").map(String::as_str), Some("Title is required"));
    }

    #[test]
    fn empty_field_errors_are_omitted_from_json() {
        let json = serde_json::to_string(&AppError::conflict("taken")).unwrap();
        assert!(!json.contains("field_errors"));
    }

    #[test]
    fn kinds_map_to_http_statuses() {
        assert_eq!(AppError::not_found("").kind.status_code(), 404);
        assert_eq!(AppError::bad_request("").kind.status_code(), 400);
        assert_eq!(AppError::validation("", HashMap::new()).kind.status_code(), 422);
        assert_eq!(AppError::conflict("").kind.status_code(), 409);
        assert_eq!(AppError::unauthorized("").kind.status_code(), 401);
        assert_eq!(AppError::forbidden("").kind.status_code(), 403);
        assert_eq!(AppError::database("").kind.status_code(), 500);
        assert_eq!(AppError::internal("").kind.status_code(), 500);
    }

    #[test]
    fn display_includes_kind_and_message() {
        assert_eq!(
            AppError::unauthorized("bad credentials").to_string(),
            "Unauthorized: bad credentials"
        );
    }
}
