use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CHAT_MESSAGE_MAX_CHARS: usize = 1000;

/// One message in a student's support thread. `user_id` is the thread
/// owner; `sender_id` is whoever wrote it (the student or housing staff).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatMessageResponse {
    pub id: String,
    pub sender_id: i64,
    pub sender_name: String,
    pub body: String,
    pub created_at: String,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id.to_string(),
            sender_id: m.sender_id,
            sender_name: m.sender_name,
            body: m.body,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

/// Validate the `trimmed()` copy. A blank body is turned away before
/// validation as a bad request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SendChatMessage {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 1000, message = "Messages are limited to 1000 characters"))
    )]
    pub body: String,
}

impl SendChatMessage {
    pub fn trimmed(&self) -> Self {
        Self {
            body: self.body.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}
