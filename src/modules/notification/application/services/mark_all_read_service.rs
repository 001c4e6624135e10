use async_trait::async_trait;
use tracing::info;

use crate::notification::application::ports::{
    incoming::use_cases::{MarkAllReadError, MarkAllReadUseCase},
    outgoing::NotificationRepository,
};

#[derive(Debug, Clone)]
pub struct MarkAllReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> MarkAllReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkAllReadUseCase for MarkAllReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<u64, MarkAllReadError> {
        let mut unread = self
            .repository
            .list_unread_for_user(user_id)
            .await
            .map_err(|e| MarkAllReadError::RepositoryError(e.to_string()))?;

        if unread.is_empty() {
            return Ok(0);
        }

        for notification in unread.iter_mut() {
            notification.mark_as_read();
        }

        self.repository
            .save_read_state(&unread)
            .await
            .map_err(|e| MarkAllReadError::RepositoryError(e.to_string()))?;

        let updated = unread.len() as u64;
        info!("Marked {} notifications read for user {}", updated, user_id);
        Ok(updated)
    }
}
