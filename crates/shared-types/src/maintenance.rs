use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Status and priority
// ---------------------------------------------------------------------------

/// Lifecycle of a request. New requests start as `Pending`; staff tooling
/// moves them forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "pending",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(MaintenanceStatus::Pending),
            "in_progress" => Some(MaintenanceStatus::InProgress),
            "completed" => Some(MaintenanceStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Medium,
    High,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenancePriority::Low => "low",
            MaintenancePriority::Medium => "medium",
            MaintenancePriority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(MaintenancePriority::Low),
            "medium" => Some(MaintenancePriority::Medium),
            "high" => Some(MaintenancePriority::High),
            _ => None,
        }
    }
}

pub const MAINTENANCE_STATUSES: &[&str] = &["pending", "in_progress", "completed"];
pub const MAINTENANCE_PRIORITIES: &[&str] = &["low", "medium", "high"];

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A maintenance request filed by a student about their accommodation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// Wire form of a maintenance request. Timestamps are RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MaintenanceRequestResponse {
    pub id: String,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created_at: String,
}

impl From<MaintenanceRequest> for MaintenanceRequestResponse {
    fn from(r: MaintenanceRequest) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            status: r.status,
            priority: r.priority,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Body for filing a request. The owner is always the caller, so there is
/// no `user_id` field.
///
/// Validate the `trimmed()` copy; that is what gets stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateMaintenanceRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Title must be 1 to 120 characters"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 1,
            max = 2000,
            message = "Description must be 1 to 2000 characters"
        ))
    )]
    pub description: String,
    #[serde(default = "default_priority")]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_priority"))
    )]
    pub priority: String,
}

fn default_priority() -> String {
    MaintenancePriority::default().as_str().to_string()
}

#[cfg(feature = "validation")]
fn validate_priority(priority: &str) -> Result<(), validator::ValidationError> {
    if MaintenancePriority::parse(priority).is_some() {
        return Ok(());
    }
    let mut error = validator::ValidationError::new("priority");
    error.message = Some("Priority must be low, medium or high".into());
    Err(error)
}

impl CreateMaintenanceRequest {
    /// Copy with surrounding whitespace removed, as stored.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority.trim().to_string(),
        }
    }
}
