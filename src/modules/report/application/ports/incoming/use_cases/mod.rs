mod generate_event_assignments_report;
mod generate_volunteer_activity_report;
mod report_request;

pub use generate_event_assignments_report::*;
pub use generate_volunteer_activity_report::*;
pub use report_request::*;
