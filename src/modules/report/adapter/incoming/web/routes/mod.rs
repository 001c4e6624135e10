mod event_assignments_report;
mod report_query;
mod volunteer_activity_report;

pub use event_assignments_report::*;
pub use report_query::*;
pub use volunteer_activity_report::*;
