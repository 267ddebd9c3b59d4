//! In-memory notification store.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use volhub_core::types::id::{NotificationId, VolunteerId};
use volhub_entity::notification::Notification;
use volhub_entity::role::Role;

/// In-memory notification store guarded by a Tokio mutex.
///
/// Records are kept newest-first: `create` pushes to the front of the pool,
/// so listings start with the most recent notification. Identifiers come
/// from a monotonic counter and are never reused within a process.
#[derive(Debug)]
pub struct NotificationStore {
    /// Notification pool, newest first.
    pool: Mutex<VecDeque<Notification>>,
    /// Monotonic identifier source.
    next_id: AtomicI64,
}

impl NotificationStore {
    /// Create an empty notification store.
    pub fn new() -> Self {
        Self {
            pool: Mutex::new(VecDeque::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> NotificationId {
        NotificationId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Create a notification and return the stored record.
    ///
    /// A `None` recipient addresses every member of the role audience.
    pub async fn create(
        &self,
        recipient_type: Role,
        recipient_id: Option<VolunteerId>,
        message: String,
    ) -> Notification {
        let notification = Notification {
            id: self.allocate_id(),
            recipient_type,
            recipient_id,
            message,
            read: false,
            timestamp: Utc::now(),
        };

        let mut pool = self.pool.lock().await;
        pool.push_front(notification.clone());
        debug!(
            id = %notification.id,
            recipient = %recipient_type,
            "Notification stored"
        );

        notification
    }

    /// List notifications for a role audience, newest first.
    ///
    /// With a `recipient_id` filter, only records addressed to exactly that
    /// volunteer are returned; audience-wide records (which carry no
    /// recipient) are not included. Without the filter, every record of the
    /// role is returned regardless of its individual recipient.
    pub async fn list(
        &self,
        recipient_type: Role,
        recipient_id: Option<VolunteerId>,
        unread_only: bool,
    ) -> Vec<Notification> {
        let pool = self.pool.lock().await;
        pool.iter()
            .filter(|n| n.recipient_type == recipient_type)
            .filter(|n| recipient_id.is_none() || n.recipient_id == recipient_id)
            .filter(|n| !unread_only || n.is_unread())
            .cloned()
            .collect()
    }

    /// Mark a notification as read and return the updated record.
    ///
    /// Marking an already-read notification is a no-op that still returns
    /// the record. Returns `None` when the identifier is unknown.
    pub async fn mark_read(&self, id: NotificationId) -> Option<Notification> {
        let mut pool = self.pool.lock().await;
        let notification = pool.iter_mut().find(|n| n.id == id)?;
        notification.read = true;
        Some(notification.clone())
    }

    /// Remove a notification. Returns `false` when the identifier is unknown.
    pub async fn delete(&self, id: NotificationId) -> bool {
        let mut pool = self.pool.lock().await;
        let before = pool.len();
        pool.retain(|n| n.id != id);
        let deleted = pool.len() != before;
        if deleted {
            debug!(id = %id, "Notification deleted");
        }
        deleted
    }

    /// Number of notifications currently stored.
    pub async fn len(&self) -> usize {
        self.pool.lock().await.len()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
