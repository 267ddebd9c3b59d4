//! Notification delivery and lifecycle.

use std::sync::Arc;

use tracing::info;

use volhub_core::error::AppError;
use volhub_core::result::AppResult;
use volhub_core::types::id::{NotificationId, VolunteerId};
use volhub_entity::notification::Notification;
use volhub_entity::role::Role;
use volhub_store::NotificationStore;

/// Manages notification delivery and lifecycle.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Backing notification store.
    store: Arc<NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<NotificationStore>) -> Self {
        Self { store }
    }

    /// Lists notifications for a role audience, newest first.
    pub async fn list(
        &self,
        recipient_type: Role,
        recipient_id: Option<VolunteerId>,
        unread_only: bool,
    ) -> Vec<Notification> {
        self.store
            .list(recipient_type, recipient_id, unread_only)
            .await
    }

    /// Creates a notification addressed to a role audience or a volunteer.
    pub async fn create(
        &self,
        recipient_type: Role,
        recipient_id: Option<VolunteerId>,
        message: String,
    ) -> Notification {
        let notification = self
            .store
            .create(recipient_type, recipient_id, message)
            .await;
        info!(
            id = %notification.id,
            recipient = %recipient_type,
            broadcast = notification.is_broadcast(),
            "Notification created"
        );
        notification
    }

    /// Marks a notification as read and returns the updated record.
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<Notification> {
        self.store
            .mark_read(id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))
    }

    /// Deletes a notification.
    pub async fn delete(&self, id: NotificationId) -> AppResult<()> {
        if self.store.delete(id).await {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Notification {id} not found")))
        }
    }

    /// Notifies every administrator.
    pub async fn broadcast_admins(&self, message: impl Into<String>) -> Notification {
        self.create(Role::Admin, None, message.into()).await
    }

    /// Notifies a single volunteer.
    pub async fn notify_volunteer(
        &self,
        volunteer_id: VolunteerId,
        message: impl Into<String>,
    ) -> Notification {
        self.create(Role::Volunteer, Some(volunteer_id), message.into())
            .await
    }
}
