//! Notification Model

use serde::{Deserialize, Serialize};

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    StatusUpdate,
    NewMessage,
    ReportResolved,
    SystemAlert,
}

/// A notification entry for the current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Screen path to open when clicked, if any
    #[serde(default)]
    pub link: Option<String>,
}
