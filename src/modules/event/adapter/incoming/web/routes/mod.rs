mod assign_volunteer;
mod get_event_assignments;
mod get_upcoming_events;
mod get_volunteer_history;
mod upsert_event;

pub use assign_volunteer::*;
pub use get_event_assignments::*;
pub use get_upcoming_events::*;
pub use get_volunteer_history::*;
pub use upsert_event::*;
