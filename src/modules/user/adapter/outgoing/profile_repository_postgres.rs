use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use serde_json::Value as Json;
use std::sync::Arc;

use super::sea_orm_entity::user_profiles::{
    ActiveModel as ProfileActiveModel, Column, Entity as ProfileEntity, Model as ProfileModel,
};
use crate::event::adapter::outgoing::event_repository_postgres::{
    skills_from_json, skills_to_json, strings_from_json,
};
use crate::user::application::domain::{ProfileDetails, UserProfile};
use crate::user::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

pub(crate) fn model_to_profile(model: ProfileModel) -> Result<UserProfile, ProfileRepositoryError> {
    let corrupt = ProfileRepositoryError::CorruptRecord;

    let details = ProfileDetails {
        first_name: model.first_name,
        last_name: model.last_name,
        address_one: model.address_one,
        address_two: model.address_two,
        city: model.city,
        state: model.state,
        zip_code: model.zip_code,
        skills: skills_from_json(model.skills).map_err(corrupt)?,
        preferences: model.preferences,
        availability: strings_from_json(model.availability).map_err(corrupt)?,
    };

    UserProfile::rehydrate(&model.user_id, details).map_err(|e| corrupt(e.to_string()))
}

fn profile_to_active(profile: &UserProfile) -> ProfileActiveModel {
    ProfileActiveModel {
        user_id: Set(profile.user_id().to_string()),
        first_name: Set(profile.first_name().to_string()),
        last_name: Set(profile.last_name().to_string()),
        address_one: Set(profile.address_one().to_string()),
        address_two: Set(profile.address_two().map(str::to_string)),
        city: Set(profile.city().to_string()),
        state: Set(profile.state().to_string()),
        zip_code: Set(profile.zip_code().to_string()),
        skills: Set(skills_to_json(profile.skills())),
        preferences: Set(profile.preferences().to_string()),
        availability: Set(Json::from(profile.availability().to_vec())),
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        if user_id.trim().is_empty() {
            return Ok(None);
        }

        ProfileEntity::find_by_id(user_id.trim().to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_profile)
            .transpose()
    }

    async fn create(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError> {
        ProfileEntity::insert(profile_to_active(profile))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError> {
        let result = ProfileEntity::update_many()
            .set(profile_to_active(profile))
            .filter(Column::UserId.eq(profile.user_id()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound(
                profile.user_id().to_string(),
            ));
        }
        Ok(())
    }
}
