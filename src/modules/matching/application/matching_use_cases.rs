use std::sync::Arc;

use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingEventsUseCase, GetMatchingVolunteersUseCase,
};

#[derive(Clone)]
pub struct MatchingUseCases {
    pub volunteers: Arc<dyn GetMatchingVolunteersUseCase + Send + Sync>,
    pub events: Arc<dyn GetMatchingEventsUseCase + Send + Sync>,
}
