use std::sync::Arc;

use crate::event::application::ports::incoming::use_cases::{
    AssignVolunteerUseCase, GetEventAssignmentsUseCase, GetUpcomingEventsUseCase,
    GetVolunteerHistoryUseCase, UpsertEventUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub upsert: Arc<dyn UpsertEventUseCase + Send + Sync>,
    pub assign_volunteer: Arc<dyn AssignVolunteerUseCase + Send + Sync>,
    pub upcoming: Arc<dyn GetUpcomingEventsUseCase + Send + Sync>,
    pub history: Arc<dyn GetVolunteerHistoryUseCase + Send + Sync>,
    pub assignments: Arc<dyn GetEventAssignmentsUseCase + Send + Sync>,
}
