use chrono::{DateTime, Utc};

use crate::report::application::domain::{
    EventAssignmentReport, ReportFile, ReportFormat, VolunteerActivityRow,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportRenderError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

/// Turns report rows into a downloadable file. Rows arrive already sorted.
#[cfg_attr(test, mockall::automock)]
pub trait ReportFileRenderer: Send + Sync {
    fn render_volunteer_activity(
        &self,
        rows: &[VolunteerActivityRow],
        format: ReportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportFile, ReportRenderError>;

    fn render_event_assignments(
        &self,
        reports: &[EventAssignmentReport],
        format: ReportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportFile, ReportRenderError>;
}
