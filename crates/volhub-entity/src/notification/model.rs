//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use volhub_core::types::id::{NotificationId, VolunteerId};

use crate::role::Role;

/// A notification addressed to a role audience or to a single volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Audience the notification is addressed to.
    pub recipient_type: Role,
    /// Specific volunteer recipient; `None` addresses the whole audience.
    pub recipient_id: Option<VolunteerId>,
    /// Notification body text.
    pub message: String,
    /// Whether the recipient has read this notification.
    pub read: bool,
    /// When the notification was created.
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Check if the notification addresses the whole audience rather than
    /// a single volunteer.
    pub fn is_broadcast(&self) -> bool {
        self.recipient_id.is_none()
    }
}
