pub mod aggregation;
pub mod report;

pub use aggregation::{build_activity_rows, build_event_reports, full_name};
pub use report::{
    ActivityRecord, EventAssignmentReport, EventVolunteerRow, ReportFile, ReportFormat,
    ReportKind, ReportRange, VolunteerActivityRow,
};
