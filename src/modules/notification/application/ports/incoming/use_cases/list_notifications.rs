use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::notification::application::domain::Notification;
use crate::shared::domain::datetime::to_iso_string;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub message: String,
    pub is_read: bool,
    #[schema(example = "2025-03-01T14:00:00.000000Z")]
    pub created_at: String,
}

impl From<&Notification> for NotificationDto {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id().to_string(),
            message: n.message().to_string(),
            is_read: n.is_read(),
            created_at: to_iso_string(&n.created_at()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListNotificationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListNotificationsUseCase: Send + Sync {
    async fn execute(&self, user_id: &str)
        -> Result<Vec<NotificationDto>, ListNotificationsError>;
}
