use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::volunteer_history::{
    ActiveModel as HistoryActiveModel, Column, Entity as HistoryEntity, Model as HistoryModel,
};
use crate::event::application::domain::VolunteerHistory;
use crate::event::application::ports::outgoing::{
    AssignmentRecord, VolunteerHistoryRepository, VolunteerHistoryRepositoryError,
};
use crate::notification::adapter::outgoing::notification_repository_postgres::notification_to_active;
use crate::notification::adapter::outgoing::sea_orm_entity::notifications::Entity as NotificationEntity;
use crate::notification::application::domain::Notification;
use crate::shared::domain::datetime::{from_db, to_db};

#[derive(Debug, Clone)]
pub struct VolunteerHistoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VolunteerHistoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> VolunteerHistoryRepositoryError {
    VolunteerHistoryRepositoryError::DatabaseError(e.to_string())
}

pub(crate) fn model_to_history(
    model: HistoryModel,
) -> Result<VolunteerHistory, VolunteerHistoryRepositoryError> {
    VolunteerHistory::rehydrate(
        model.id,
        &model.user_id,
        &model.event_id,
        from_db(&model.date_utc),
        model.duration_minutes,
        from_db(&model.created_at),
    )
    .map_err(|e| VolunteerHistoryRepositoryError::CorruptRecord(e.to_string()))
}

fn history_to_active(history: &VolunteerHistory) -> HistoryActiveModel {
    HistoryActiveModel {
        id: Set(history.id().to_string()),
        user_id: Set(history.user_id().to_string()),
        event_id: Set(history.event_id().to_string()),
        date_utc: Set(to_db(&history.date_utc())),
        duration_minutes: Set(history.duration_minutes()),
        created_at: Set(to_db(&history.created_at())),
    }
}

/// Keeps the first occurrence of each id.
fn distinct_in_order(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[async_trait]
impl VolunteerHistoryRepository for VolunteerHistoryRepositoryPostgres {
    async fn find_by_event_and_user(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<VolunteerHistory>, VolunteerHistoryRepositoryError> {
        HistoryEntity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_history)
            .transpose()
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<VolunteerHistory>, VolunteerHistoryRepositoryError> {
        HistoryEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::DateUtc)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_history)
            .collect()
    }

    async fn volunteer_ids_for_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<String>, VolunteerHistoryRepositoryError> {
        let ids = HistoryEntity::find()
            .select_only()
            .column(Column::UserId)
            .filter(Column::EventId.eq(event_id))
            .order_by_asc(Column::CreatedAt)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(distinct_in_order(ids))
    }

    async fn record_assignment(
        &self,
        history: &VolunteerHistory,
        notification: &Notification,
    ) -> Result<AssignmentRecord, VolunteerHistoryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = match HistoryEntity::insert(history_to_active(history))
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::EventId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        if inserted == 0 {
            let existing = HistoryEntity::find()
                .filter(Column::EventId.eq(history.event_id()))
                .filter(Column::UserId.eq(history.user_id()))
                .one(&txn)
                .await;
            let _ = txn.rollback().await;

            return match existing.map_err(map_db_err)? {
                Some(model) => Ok(AssignmentRecord::AlreadyAssigned(model_to_history(model)?)),
                None => Err(VolunteerHistoryRepositoryError::DatabaseError(format!(
                    "assignment of '{}' to '{}' was neither inserted nor found",
                    history.user_id(),
                    history.event_id()
                ))),
            };
        }

        if let Err(e) = NotificationEntity::insert(notification_to_active(notification))
            .exec_without_returning(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(AssignmentRecord::Created(history.clone()))
    }
}
