use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;
use tracing::warn;

use crate::auth::adapter::outgoing::sea_orm_entity::user_credentials::{
    Column as CredentialsColumn, Entity as CredentialsEntity,
};
use crate::event::adapter::outgoing::event_repository_postgres::model_to_event;
use crate::event::adapter::outgoing::sea_orm_entity::events::{
    Column as EventColumn, Entity as EventEntity,
};
use crate::event::adapter::outgoing::sea_orm_entity::volunteer_history::{
    Column as HistoryColumn, Entity as HistoryEntity,
};
use crate::event::adapter::outgoing::volunteer_history_repository_postgres::model_to_history;
use crate::event::application::domain::Event;
use crate::report::application::domain::{ActivityRecord, ReportRange};
use crate::report::application::ports::outgoing::{ReportingQuery, ReportingQueryError};
use crate::shared::domain::datetime::to_db;
use crate::user::adapter::outgoing::profile_repository_postgres::model_to_profile;
use crate::user::adapter::outgoing::sea_orm_entity::user_profiles::{
    Column as ProfileColumn, Entity as ProfileEntity,
};
use crate::user::application::domain::UserProfile;

#[derive(Debug, Clone)]
pub struct ReportingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReportingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReportingQueryError {
    ReportingQueryError::DatabaseError(e.to_string())
}

fn corrupt(e: impl std::fmt::Display) -> ReportingQueryError {
    ReportingQueryError::CorruptRecord(e.to_string())
}

fn within<E, C>(mut select: Select<E>, column: C, range: ReportRange) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    if let Some(from) = range.from_utc {
        select = select.filter(column.gte(to_db(&from)));
    }
    if let Some(to) = range.to_utc {
        select = select.filter(column.lte(to_db(&to)));
    }
    select
}

fn distinct(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.collect();
    ids.sort();
    ids.dedup();
    ids
}

#[async_trait]
impl ReportingQuery for ReportingQueryPostgres {
    async fn activity_in_range(
        &self,
        range: ReportRange,
    ) -> Result<Vec<ActivityRecord>, ReportingQueryError> {
        let histories = within(HistoryEntity::find(), HistoryColumn::DateUtc, range)
            .order_by_asc(HistoryColumn::DateUtc)
            .order_by_asc(HistoryColumn::UserId)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if histories.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids = distinct(histories.iter().map(|h| h.event_id.clone()));
        let user_ids = distinct(histories.iter().map(|h| h.user_id.clone()));

        let events: HashMap<String, Event> = EventEntity::find()
            .filter(EventColumn::Id.is_in(event_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| model_to_event(model).map(|e| (e.id().to_string(), e)))
            .collect::<Result<_, _>>()
            .map_err(corrupt)?;

        let emails: HashMap<String, String> = CredentialsEntity::find()
            .filter(CredentialsColumn::Id.is_in(user_ids.clone()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| (model.id, model.email))
            .collect();

        let profiles: HashMap<String, UserProfile> = ProfileEntity::find()
            .filter(ProfileColumn::UserId.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| model_to_profile(model).map(|p| (p.user_id().to_string(), p)))
            .collect::<Result<_, _>>()
            .map_err(corrupt)?;

        let mut records = Vec::with_capacity(histories.len());
        for model in histories {
            let history = model_to_history(model).map_err(corrupt)?;

            let (Some(event), Some(email)) =
                (events.get(history.event_id()), emails.get(history.user_id()))
            else {
                warn!(history_id = %history.id(), "History row without event or credentials");
                continue;
            };

            records.push(ActivityRecord {
                event: event.clone(),
                email: email.clone(),
                profile: profiles.get(history.user_id()).cloned(),
                history,
            });
        }

        Ok(records)
    }

    async fn events_in_range(&self, range: ReportRange) -> Result<Vec<Event>, ReportingQueryError> {
        within(EventEntity::find(), EventColumn::DateUtc, range)
            .order_by_asc(EventColumn::DateUtc)
            .order_by_asc(EventColumn::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| model_to_event(model).map_err(corrupt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::user_credentials::Model as CredentialsModel;
    use crate::event::adapter::outgoing::sea_orm_entity::events::Model as EventModel;
    use crate::event::adapter::outgoing::sea_orm_entity::volunteer_history::Model as HistoryModel;
    use crate::user::adapter::outgoing::sea_orm_entity::user_profiles::Model as ProfileModel;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn at(day: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2025, 10, day, 9, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    fn history(id: &str, user: &str, event: &str) -> HistoryModel {
        HistoryModel {
            id: id.into(),
            user_id: user.into(),
            event_id: event.into(),
            date_utc: at(3),
            duration_minutes: 60,
            created_at: at(1),
        }
    }

    fn event(id: &str) -> EventModel {
        EventModel {
            id: id.into(),
            name: "Shelter Shift".into(),
            description: "Evening shift".into(),
            location: "Shelter".into(),
            date_utc: at(3),
            urgency: "High".into(),
            required_skills: serde_json::json!(["Cooking"]),
        }
    }

    fn credentials(id: &str) -> CredentialsModel {
        CredentialsModel {
            id: id.into(),
            email: format!("{id}@example.com"),
            password_hash: "$argon2id$x".into(),
            role: "Volunteer".into(),
            created_at: at(1),
        }
    }

    fn profile(user: &str) -> ProfileModel {
        ProfileModel {
            user_id: user.into(),
            first_name: "Lee".into(),
            last_name: "Park".into(),
            address_one: "9 Oak".into(),
            address_two: None,
            city: "Tulsa".into(),
            state: "OK".into(),
            zip_code: "74103".into(),
            skills: serde_json::json!([]),
            preferences: "".into(),
            availability: serde_json::json!([]),
        }
    }

    #[tokio::test]
    async fn joins_events_emails_and_optional_profiles() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                history("h1", "u1", "evt-1"),
                history("h2", "u2", "evt-1"),
            ]])
            .append_query_results(vec![vec![event("evt-1")]])
            .append_query_results(vec![vec![credentials("u1"), credentials("u2")]])
            .append_query_results(vec![vec![profile("u1")]])
            .into_connection();

        let query = ReportingQueryPostgres::new(Arc::new(db));
        let records = query.activity_in_range(ReportRange::default()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event.name(), "Shelter Shift");
        assert_eq!(records[0].profile.as_ref().map(|p| p.first_name()), Some("Lee"));
        assert_eq!(records[1].email, "u2@example.com");
        assert!(records[1].profile.is_none());
    }

    #[tokio::test]
    async fn empty_range_issues_a_single_query() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<HistoryModel>::new()])
                .into_connection(),
        );

        let query = ReportingQueryPostgres::new(Arc::clone(&db));
        let from = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let records = query
            .activity_in_range(ReportRange::new(Some(from), None))
            .await
            .unwrap();
        assert!(records.is_empty());
        drop(query);

        let log = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => panic!("connection still shared"),
        };
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains(">="));
    }

    #[tokio::test]
    async fn scheduled_events_map_stored_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![event("evt-9")]])
            .into_connection();

        let query = ReportingQueryPostgres::new(Arc::new(db));
        let events = query.events_in_range(ReportRange::default()).await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id(), "evt-9");
    }
}
