mod event;
mod volunteer_history;

pub use event::Event;
pub use volunteer_history::VolunteerHistory;
