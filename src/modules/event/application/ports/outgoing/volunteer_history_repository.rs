use async_trait::async_trait;

use crate::event::application::domain::VolunteerHistory;
use crate::notification::application::domain::Notification;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VolunteerHistoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored volunteer history is invalid: {0}")]
    CorruptRecord(String),
}

/// Outcome of [`VolunteerHistoryRepository::record_assignment`].
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentRecord {
    /// History and notification were both written.
    Created(VolunteerHistory),
    /// A row for the same (user, event) already existed; nothing was written.
    AlreadyAssigned(VolunteerHistory),
}

impl AssignmentRecord {
    pub fn history(&self) -> &VolunteerHistory {
        match self {
            AssignmentRecord::Created(h) | AssignmentRecord::AlreadyAssigned(h) => h,
        }
    }

    pub fn into_history(self) -> VolunteerHistory {
        match self {
            AssignmentRecord::Created(h) | AssignmentRecord::AlreadyAssigned(h) => h,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerHistoryRepository: Send + Sync {
    async fn find_by_event_and_user(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<VolunteerHistory>, VolunteerHistoryRepositoryError>;

    /// Newest participation first.
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<VolunteerHistory>, VolunteerHistoryRepositoryError>;

    /// Distinct, in assignment order.
    async fn volunteer_ids_for_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<String>, VolunteerHistoryRepositoryError>;

    /// Inserts the history row and its notification in one transaction.
    /// An existing row for the same (user, event) wins and suppresses the
    /// notification.
    async fn record_assignment(
        &self,
        history: &VolunteerHistory,
        notification: &Notification,
    ) -> Result<AssignmentRecord, VolunteerHistoryRepositoryError>;
}
