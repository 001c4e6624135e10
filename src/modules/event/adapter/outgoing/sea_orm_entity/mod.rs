pub mod events;
pub mod volunteer_history;
