use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;

use crate::notification::application::domain::Notification;
use crate::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};
use crate::shared::domain::datetime::{from_db, to_db};

use super::sea_orm_entity::notifications::{
    ActiveModel as NotificationActiveModel, Column, Entity as NotificationEntity,
    Model as NotificationModel,
};

#[derive(Debug, Clone)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> NotificationRepositoryError {
    NotificationRepositoryError::DatabaseError(e.to_string())
}

pub(crate) fn model_to_notification(
    model: NotificationModel,
) -> Result<Notification, NotificationRepositoryError> {
    Notification::rehydrate(
        model.id,
        &model.user_id,
        &model.message,
        model.is_read,
        from_db(&model.created_at),
    )
    .map_err(|e| NotificationRepositoryError::CorruptRecord(e.to_string()))
}

pub(crate) fn notification_to_active(notification: &Notification) -> NotificationActiveModel {
    NotificationActiveModel {
        id: Set(notification.id().to_string()),
        user_id: Set(notification.user_id().to_string()),
        message: Set(notification.message().to_string()),
        is_read: Set(notification.is_read()),
        created_at: Set(to_db(&notification.created_at())),
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        NotificationEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_notification)
            .collect()
    }

    async fn list_unread_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        NotificationEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_notification)
            .collect()
    }

    async fn save_read_state(
        &self,
        notifications: &[Notification],
    ) -> Result<u64, NotificationRepositoryError> {
        let read_ids: Vec<String> = notifications
            .iter()
            .filter(|n| n.is_read())
            .map(|n| n.id().to_string())
            .collect();

        if read_ids.is_empty() {
            return Ok(0);
        }

        let result = NotificationEntity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.is_in(read_ids))
            .filter(Column::IsRead.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
