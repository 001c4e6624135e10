use async_trait::async_trait;

use crate::notification::application::ports::{
    incoming::use_cases::{ListNotificationsError, ListNotificationsUseCase, NotificationDto},
    outgoing::NotificationRepository,
};

#[derive(Debug, Clone)]
pub struct ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListNotificationsUseCase for ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationDto>, ListNotificationsError> {
        let notifications = self
            .repository
            .list_for_user(user_id)
            .await
            .map_err(|e| ListNotificationsError::RepositoryError(e.to_string()))?;

        Ok(notifications.iter().map(NotificationDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::domain::Notification;
    use crate::notification::application::ports::outgoing::{
        notification_repository::MockNotificationRepository, NotificationRepositoryError,
    };
    use chrono::{Duration, Utc};

    fn notification(message: &str, minutes_ago: i64, is_read: bool) -> Notification {
        Notification::rehydrate(
            format!("n-{message}"),
            "user-1",
            message,
            is_read,
            Utc::now() - Duration::minutes(minutes_ago),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn maps_repository_order_to_dtos() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_list_for_user().times(1).returning(|_| {
            Ok(vec![
                notification("newest", 1, false),
                notification("older", 30, true),
            ])
        });

        let service = ListNotificationsService::new(repo);
        let result = service.execute("user-1").await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].message, "newest");
        assert!(!result[0].is_read);
        assert_eq!(result[1].message, "older");
        assert!(result[1].is_read);
        assert!(result[0].created_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_list_for_user()
            .returning(|_| Err(NotificationRepositoryError::DatabaseError("down".into())));

        let service = ListNotificationsService::new(repo);
        let result = service.execute("user-1").await;

        assert!(matches!(
            result,
            Err(ListNotificationsError::RepositoryError(msg)) if msg.contains("down")
        ));
    }
}
