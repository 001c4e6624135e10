use chrono::{DateTime, Utc};

use crate::shared::domain::{errors::require_text, new_id, DomainError};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: String,
    user_id: String,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Unread, stamped now.
    pub fn new(user_id: &str, message: &str) -> Result<Self, DomainError> {
        Self::rehydrate(new_id(), user_id, message, false, Utc::now())
    }

    pub fn rehydrate(
        id: String,
        user_id: &str,
        message: &str,
        is_read: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: require_text("Notification id", &id)?,
            user_id: require_text("User id", user_id)?,
            message: require_text("Message", message)?,
            is_read,
            created_at,
        })
    }

    pub fn mark_as_read(&mut self) {
        self.is_read = true;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
