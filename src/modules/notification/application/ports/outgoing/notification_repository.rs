use async_trait::async_trait;

use crate::notification::application::domain::Notification;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored notification is invalid: {0}")]
    CorruptRecord(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;

    async fn list_unread_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;

    /// Persists the read flag of every given notification in a single write.
    /// Returns the number of rows changed.
    async fn save_read_state(
        &self,
        notifications: &[Notification],
    ) -> Result<u64, NotificationRepositoryError>;
}
