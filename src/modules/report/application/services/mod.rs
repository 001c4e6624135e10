mod event_assignments_report_service;
mod volunteer_activity_report_service;

pub use event_assignments_report_service::EventAssignmentsReportService;
pub use volunteer_activity_report_service::VolunteerActivityReportService;
