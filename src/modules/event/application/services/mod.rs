mod assign_volunteer_service;
mod get_event_assignments_service;
mod get_upcoming_events_service;
mod get_volunteer_history_service;
mod upsert_event_service;

pub use assign_volunteer_service::{assignment_message, AssignVolunteerService};
pub use get_event_assignments_service::GetEventAssignmentsService;
pub use get_upcoming_events_service::GetUpcomingEventsService;
pub use get_volunteer_history_service::GetVolunteerHistoryService;
pub use upsert_event_service::UpsertEventService;
