use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::user_credentials::Column as CredentialsColumn;
use crate::auth::application::domain::UserRole;
use crate::matching::application::ports::outgoing::{VolunteerDirectory, VolunteerDirectoryError};
use crate::user::adapter::outgoing::profile_repository_postgres::model_to_profile;
use crate::user::adapter::outgoing::sea_orm_entity::user_profiles::{
    Column as ProfileColumn, Entity as ProfileEntity, Relation as ProfileRelation,
};
use crate::user::application::domain::UserProfile;

#[derive(Debug, Clone)]
pub struct VolunteerDirectoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VolunteerDirectoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VolunteerDirectory for VolunteerDirectoryPostgres {
    async fn volunteer_profiles(&self) -> Result<Vec<UserProfile>, VolunteerDirectoryError> {
        ProfileEntity::find()
            .join(JoinType::InnerJoin, ProfileRelation::UserCredentials.def())
            .filter(CredentialsColumn::Role.eq(UserRole::Volunteer.to_string()))
            .order_by_asc(ProfileColumn::LastName)
            .order_by_asc(ProfileColumn::FirstName)
            .all(&*self.db)
            .await
            .map_err(|e| VolunteerDirectoryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|model| {
                model_to_profile(model)
                    .map_err(|e| VolunteerDirectoryError::CorruptRecord(e.to_string()))
            })
            .collect()
    }
}
