use chrono::{DateTime, Utc};

use crate::event::application::domain::{Event, VolunteerHistory};
use crate::user::application::domain::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Pdf,
}

impl ReportFormat {
    /// Anything other than `pdf` (case-insensitive) falls back to CSV.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("pdf") => ReportFormat::Pdf,
            _ => ReportFormat::Csv,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::Pdf => "application/pdf",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    VolunteerActivity,
    EventAssignments,
}

impl ReportKind {
    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::VolunteerActivity => "volunteer-activity",
            ReportKind::EventAssignments => "event-assignments",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::VolunteerActivity => "Volunteer Activity Report",
            ReportKind::EventAssignments => "Event Assignments Report",
        }
    }

    /// `<slug>-<yyyyMMddHHmmss>.<ext>`
    pub fn file_name(self, format: ReportFormat, generated_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}.{}",
            self.slug(),
            generated_at.format("%Y%m%d%H%M%S"),
            format.extension()
        )
    }
}

/// Inclusive bounds on the participation date. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportRange {
    pub from_utc: Option<DateTime<Utc>>,
    pub to_utc: Option<DateTime<Utc>>,
}

impl ReportRange {
    pub fn new(from_utc: Option<DateTime<Utc>>, to_utc: Option<DateTime<Utc>>) -> Self {
        Self { from_utc, to_utc }
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.from_utc, self.to_utc), (Some(from), Some(to)) if from > to)
    }
}

/// One history row with everything the reports print about it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub history: VolunteerHistory,
    pub event: Event,
    pub email: String,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerActivityRow {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub event_id: String,
    pub event_name: String,
    pub event_date_utc: DateTime<Utc>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventVolunteerRow {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub participation_date_utc: DateTime<Utc>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventAssignmentReport {
    pub event_id: String,
    pub event_name: String,
    pub event_date_utc: DateTime<Utc>,
    pub location: String,
    pub urgency: String,
    pub required_skills: Vec<String>,
    pub volunteers: Vec<EventVolunteerRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unknown_or_missing_format_is_csv() {
        assert_eq!(ReportFormat::from_query(None), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_query(Some("xlsx")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_query(Some(" PDF ")), ReportFormat::Pdf);
    }

    #[test]
    fn file_name_carries_kind_timestamp_and_extension() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();

        assert_eq!(
            ReportKind::EventAssignments.file_name(ReportFormat::Pdf, at),
            "event-assignments-20250304050607.pdf"
        );
        assert_eq!(
            ReportKind::VolunteerActivity.file_name(ReportFormat::Csv, at),
            "volunteer-activity-20250304050607.csv"
        );
    }

    #[test]
    fn only_a_closed_backwards_range_is_inverted() {
        let from = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();

        assert!(ReportRange::new(Some(to), Some(from)).is_inverted());
        assert!(!ReportRange::new(Some(from), Some(to)).is_inverted());
        assert!(!ReportRange::new(Some(from), Some(from)).is_inverted());
        assert!(!ReportRange::new(Some(to), None).is_inverted());
        assert!(!ReportRange::default().is_inverted());
    }
}
