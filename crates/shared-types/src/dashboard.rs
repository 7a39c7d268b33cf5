use serde::{Deserialize, Serialize};

/// Counts shown on the student dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentDashboard {
    /// Requests that are pending or in progress.
    pub open_maintenance: i64,
    pub completed_maintenance: i64,
    pub unread_notifications: i64,
}
