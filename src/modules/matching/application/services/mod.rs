mod get_matching_events_service;
mod get_matching_volunteers_service;

pub use get_matching_events_service::GetMatchingEventsService;
pub use get_matching_volunteers_service::GetMatchingVolunteersService;
