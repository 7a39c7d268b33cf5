use serde::{Deserialize, Serialize};

/// Portal role stored on the user row and carried in the JWT `role` claim.
///
/// Only `Student` may enter the student portal. `Guest` is what unknown or
/// missing role strings parse to; no account is ever stored with it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum UserRole {
    #[default]
    Guest,
    Student,
    Staff,
    Admin,
}

impl UserRole {
    /// Parse a stored role. Matching is exact; anything else becomes `Guest`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "student" => UserRole::Student,
            "staff" => UserRole::Staff,
            "admin" => UserRole::Admin,
            _ => UserRole::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => "guest",
            UserRole::Student => "student",
            UserRole::Staff => "staff",
            UserRole::Admin => "admin",
        }
    }

    /// Whether this role may use an area reserved for `required`. Staff and
    /// admins have their own portals and are turned away from student areas.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        *required == UserRole::Guest || self == required
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Self sign-up request. Accounts created this way are always students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 32, message = "Username must be 3 to 32 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Display name is required"))
    )]
    pub display_name: String,
}

/// Signed-in user as the client sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    pub fn is_student(&self) -> bool {
        self.role() == UserRole::Student
    }

    /// Single character shown when there is no avatar image.
    pub fn initial(&self) -> String {
        self.display_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Body returned by the REST login and register endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub user: AuthUser,
    /// Bearer token for API clients that do not keep cookies.
    pub access_token: String,
}
