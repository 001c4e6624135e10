use chrono::{DateTime, Utc};

use crate::shared::domain::{errors::require_text, new_id, DomainError};

/// One volunteer's participation in one event.
#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerHistory {
    id: String,
    user_id: String,
    event_id: String,
    date_utc: DateTime<Utc>,
    duration_minutes: i32,
    created_at: DateTime<Utc>,
}

fn require_positive(duration_minutes: i32) -> Result<i32, DomainError> {
    if duration_minutes <= 0 {
        return Err(DomainError::NonPositiveDuration);
    }
    Ok(duration_minutes)
}

impl VolunteerHistory {
    pub fn new(
        user_id: &str,
        event_id: &str,
        date_utc: DateTime<Utc>,
        duration_minutes: i32,
    ) -> Result<Self, DomainError> {
        Self::rehydrate(
            new_id(),
            user_id,
            event_id,
            date_utc,
            duration_minutes,
            Utc::now(),
        )
    }

    pub fn rehydrate(
        id: String,
        user_id: &str,
        event_id: &str,
        date_utc: DateTime<Utc>,
        duration_minutes: i32,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: require_text("History id", &id)?,
            user_id: require_text("UserId", user_id)?,
            event_id: require_text("EventId", event_id)?,
            date_utc,
            duration_minutes: require_positive(duration_minutes)?,
            created_at,
        })
    }

    pub fn update_duration(&mut self, duration_minutes: i32) -> Result<(), DomainError> {
        self.duration_minutes = require_positive(duration_minutes)?;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn date_utc(&self) -> DateTime<Utc> {
        self.date_utc
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
