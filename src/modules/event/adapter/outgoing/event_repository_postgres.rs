use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value as Json;
use std::sync::Arc;

use super::sea_orm_entity::events::{
    ActiveModel as EventActiveModel, Column, Entity as EventEntity, Model as EventModel,
};
use crate::event::application::domain::Event;
use crate::event::application::ports::outgoing::{
    EventRepository, EventRepositoryError, UpcomingBound,
};
use crate::shared::domain::{
    datetime::{from_db, to_db},
    parse_labeled, parse_skills,
    skill::skill_labels,
    EventUrgency, VolunteerSkill,
};

#[derive(Debug, Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}

fn corrupt(e: impl std::fmt::Display) -> EventRepositoryError {
    EventRepositoryError::CorruptRecord(e.to_string())
}

/// JSONB array of canonical skill labels.
pub(crate) fn skills_to_json(skills: &[VolunteerSkill]) -> Json {
    Json::from(skill_labels(skills))
}

pub(crate) fn strings_from_json(value: Json) -> Result<Vec<String>, String> {
    serde_json::from_value::<Vec<String>>(value).map_err(|e| e.to_string())
}

pub(crate) fn skills_from_json(value: Json) -> Result<Vec<VolunteerSkill>, String> {
    let labels = strings_from_json(value)?;
    parse_skills(&labels).map_err(|e| e.to_string())
}

pub(crate) fn model_to_event(model: EventModel) -> Result<Event, EventRepositoryError> {
    let urgency = parse_labeled::<EventUrgency>(&model.urgency).map_err(corrupt)?;
    let skills = skills_from_json(model.required_skills).map_err(corrupt)?;

    Event::rehydrate(
        model.id,
        &model.name,
        &model.description,
        &model.location,
        from_db(&model.date_utc),
        urgency,
        skills,
    )
    .map_err(corrupt)
}

fn event_to_active(event: &Event) -> EventActiveModel {
    EventActiveModel {
        id: Set(event.id().to_string()),
        name: Set(event.name().to_string()),
        description: Set(event.description().to_string()),
        location: Set(event.location().to_string()),
        date_utc: Set(to_db(&event.date_utc())),
        urgency: Set(event.urgency().to_string()),
        required_skills: Set(skills_to_json(event.required_skills())),
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn find_by_id(&self, event_id: &str) -> Result<Option<Event>, EventRepositoryError> {
        if event_id.trim().is_empty() {
            return Ok(None);
        }

        EventEntity::find_by_id(event_id.trim().to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_event)
            .transpose()
    }

    async fn find_by_ids(&self, event_ids: &[String]) -> Result<Vec<Event>, EventRepositoryError> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        EventEntity::find()
            .filter(Column::Id.is_in(event_ids.iter().cloned()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_event)
            .collect()
    }

    async fn find_upcoming(
        &self,
        now: DateTime<Utc>,
        bound: UpcomingBound,
    ) -> Result<Vec<Event>, EventRepositoryError> {
        let now = to_db(&now);
        let filter = match bound {
            UpcomingBound::Exclusive => Column::DateUtc.gt(now),
            UpcomingBound::Inclusive => Column::DateUtc.gte(now),
        };

        EventEntity::find()
            .filter(filter)
            .order_by_asc(Column::DateUtc)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_event)
            .collect()
    }

    async fn create(&self, event: &Event) -> Result<(), EventRepositoryError> {
        EventEntity::insert(event_to_active(event))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let result = EventEntity::update_many()
            .set(event_to_active(event))
            .filter(Column::Id.eq(event.id()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotFound(event.id().to_string()));
        }
        Ok(())
    }
}
