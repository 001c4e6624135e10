use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::sync::Arc;

use super::sea_orm_entity::user_credentials::{
    Column as CredentialsColumn, Entity as CredentialsEntity, Model as CredentialsModel,
};
use crate::auth::application::domain::{UserCredentials, UserRole};
use crate::auth::application::ports::outgoing::{UserReadStore, UserReadStoreError};
use crate::shared::domain::datetime::from_db;

#[derive(Clone, Debug)]
pub struct UserReadStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl UserReadStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserReadStoreError {
    UserReadStoreError::DatabaseError(e.to_string())
}

fn parse_role(raw: &str) -> Result<UserRole, UserReadStoreError> {
    UserRole::parse(raw).map_err(|e| UserReadStoreError::CorruptRecord(e.to_string()))
}

pub(crate) fn model_to_credentials(
    model: CredentialsModel,
) -> Result<UserCredentials, UserReadStoreError> {
    let role = parse_role(&model.role)?;
    UserCredentials::rehydrate(
        model.id,
        &model.email,
        &model.password_hash,
        role,
        from_db(&model.created_at),
    )
    .map_err(|e| UserReadStoreError::CorruptRecord(e.to_string()))
}

fn normalize_email(email: &str) -> Option<String> {
    let email = email.trim();
    (!email.is_empty()).then(|| email.to_lowercase())
}

#[async_trait]
impl UserReadStore for UserReadStorePostgres {
    async fn find_by_id(
        &self,
        user_id: &str,
    ) -> Result<Option<UserCredentials>, UserReadStoreError> {
        if user_id.trim().is_empty() {
            return Ok(None);
        }

        CredentialsEntity::find_by_id(user_id.trim().to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_credentials)
            .transpose()
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserReadStoreError> {
        let Some(email) = normalize_email(email) else {
            return Ok(None);
        };

        CredentialsEntity::find()
            .filter(CredentialsColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_credentials)
            .transpose()
    }

    async fn role_by_id(&self, user_id: &str) -> Result<Option<UserRole>, UserReadStoreError> {
        if user_id.trim().is_empty() {
            return Ok(None);
        }

        let role: Option<String> = CredentialsEntity::find_by_id(user_id.trim().to_string())
            .select_only()
            .column(CredentialsColumn::Role)
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        role.as_deref().map(parse_role).transpose()
    }

    async fn role_by_email(&self, email: &str) -> Result<Option<UserRole>, UserReadStoreError> {
        let Some(email) = normalize_email(email) else {
            return Ok(None);
        };

        let role: Option<String> = CredentialsEntity::find()
            .filter(CredentialsColumn::Email.eq(email))
            .select_only()
            .column(CredentialsColumn::Role)
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        role.as_deref().map(parse_role).transpose()
    }
}
