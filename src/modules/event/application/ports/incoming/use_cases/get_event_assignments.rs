use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetEventAssignmentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEventAssignmentsUseCase: Send + Sync {
    /// Distinct volunteer ids assigned to the event.
    async fn execute(&self, event_id: &str) -> Result<Vec<String>, GetEventAssignmentsError>;
}
