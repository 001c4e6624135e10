pub mod event_repository;
pub mod volunteer_history_repository;

pub use event_repository::{EventRepository, EventRepositoryError, UpcomingBound};
pub use volunteer_history_repository::{
    AssignmentRecord, VolunteerHistoryRepository, VolunteerHistoryRepositoryError,
};
