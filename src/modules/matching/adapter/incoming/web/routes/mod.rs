mod get_matching_events;
mod get_matching_volunteers;

pub use get_matching_events::*;
pub use get_matching_volunteers::*;
