mod csv;
mod pdf;

use chrono::{DateTime, Utc};

use crate::report::application::domain::{
    EventAssignmentReport, ReportFile, ReportFormat, ReportKind, VolunteerActivityRow,
};
use crate::report::application::ports::outgoing::{ReportFileRenderer, ReportRenderError};

/// CSV and PDF output for both reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReportRenderer;

impl FileReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn package(
    kind: ReportKind,
    format: ReportFormat,
    generated_at: DateTime<Utc>,
    content: Vec<u8>,
) -> ReportFile {
    ReportFile {
        file_name: kind.file_name(format, generated_at),
        content_type: format.content_type(),
        content,
    }
}

impl ReportFileRenderer for FileReportRenderer {
    fn render_volunteer_activity(
        &self,
        rows: &[VolunteerActivityRow],
        format: ReportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportFile, ReportRenderError> {
        let content = match format {
            ReportFormat::Csv => csv::volunteer_activity(rows).into_bytes(),
            ReportFormat::Pdf => pdf::volunteer_activity(rows, generated_at)?,
        };
        Ok(package(ReportKind::VolunteerActivity, format, generated_at, content))
    }

    fn render_event_assignments(
        &self,
        reports: &[EventAssignmentReport],
        format: ReportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportFile, ReportRenderError> {
        let content = match format {
            ReportFormat::Csv => csv::event_assignments(reports).into_bytes(),
            ReportFormat::Pdf => pdf::event_assignments(reports, generated_at)?,
        };
        Ok(package(ReportKind::EventAssignments, format, generated_at, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row() -> VolunteerActivityRow {
        VolunteerActivityRow {
            user_id: "u1".into(),
            full_name: "Ann Cole".into(),
            email: "ann@example.com".into(),
            event_id: "evt-1".into(),
            event_name: "Food Drive".into(),
            event_date_utc: Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap(),
            duration_minutes: 120,
        }
    }

    #[test]
    fn csv_file_is_named_and_typed() {
        let at = Utc.with_ymd_and_hms(2025, 5, 2, 13, 14, 15).unwrap();
        let file = FileReportRenderer::new()
            .render_volunteer_activity(&[row()], ReportFormat::Csv, at)
            .unwrap();

        assert_eq!(file.file_name, "volunteer-activity-20250502131415.csv");
        assert_eq!(file.content_type, "text/csv");
        assert!(file.content.starts_with(b"UserId,FullName"));
    }

    #[test]
    fn pdf_file_is_a_pdf() {
        let at = Utc.with_ymd_and_hms(2025, 5, 2, 13, 14, 15).unwrap();
        let file = FileReportRenderer::new()
            .render_event_assignments(&[], ReportFormat::Pdf, at)
            .unwrap();

        assert_eq!(file.file_name, "event-assignments-20250502131415.pdf");
        assert_eq!(file.content_type, "application/pdf");
        assert!(file.content.starts_with(b"%PDF"));
    }
}
