use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;

use super::sea_orm_entity::user_credentials::{
    ActiveModel as CredentialsActiveModel, Entity as CredentialsEntity,
};
use crate::auth::application::domain::UserCredentials;
use crate::auth::application::ports::outgoing::{
    CredentialsRepository, CredentialsRepositoryError,
};
use crate::notification::adapter::outgoing::notification_repository_postgres::notification_to_active;
use crate::notification::adapter::outgoing::sea_orm_entity::notifications::Entity as NotificationEntity;
use crate::notification::application::domain::Notification;
use crate::shared::domain::datetime::to_db;

#[derive(Clone, Debug)]
pub struct CredentialsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CredentialsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CredentialsRepositoryError {
    CredentialsRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_error(e: DbErr) -> CredentialsRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        CredentialsRepositoryError::EmailAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn credentials_to_active(credentials: &UserCredentials) -> CredentialsActiveModel {
    CredentialsActiveModel {
        id: Set(credentials.id().to_string()),
        email: Set(credentials.email().to_string()),
        password_hash: Set(credentials.password_hash().to_string()),
        role: Set(credentials.role().to_string()),
        created_at: Set(to_db(&credentials.created_at())),
    }
}

#[async_trait]
impl CredentialsRepository for CredentialsRepositoryPostgres {
    async fn create_account(
        &self,
        credentials: &UserCredentials,
        welcome: &Notification,
    ) -> Result<(), CredentialsRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = CredentialsEntity::insert(credentials_to_active(credentials))
            .exec_without_returning(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(map_insert_error(e));
        }

        if let Err(e) = NotificationEntity::insert(notification_to_active(welcome))
            .exec_without_returning(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        txn.commit().await.map_err(map_db_err)
    }
}
