use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::report::application::domain::{build_activity_rows, ReportFile};
use crate::report::application::ports::{
    incoming::use_cases::{
        GenerateReportError, GenerateVolunteerActivityReportUseCase, ReportRequest,
    },
    outgoing::{ReportFileRenderer, ReportingQuery},
};

#[derive(Debug, Clone)]
pub struct VolunteerActivityReportService<Q, F>
where
    Q: ReportingQuery + Send + Sync,
    F: ReportFileRenderer + Send + Sync,
{
    query: Q,
    renderer: F,
}

impl<Q, F> VolunteerActivityReportService<Q, F>
where
    Q: ReportingQuery + Send + Sync,
    F: ReportFileRenderer + Send + Sync,
{
    pub fn new(query: Q, renderer: F) -> Self {
        Self { query, renderer }
    }
}

#[async_trait]
impl<Q, F> GenerateVolunteerActivityReportUseCase for VolunteerActivityReportService<Q, F>
where
    Q: ReportingQuery + Send + Sync,
    F: ReportFileRenderer + Send + Sync,
{
    async fn execute(&self, request: ReportRequest) -> Result<ReportFile, GenerateReportError> {
        if request.range.is_inverted() {
            return Err(GenerateReportError::InvalidRange);
        }

        let records = self
            .query
            .activity_in_range(request.range)
            .await
            .map_err(|e| GenerateReportError::QueryError(e.to_string()))?;

        let rows = build_activity_rows(&records);

        let file = self
            .renderer
            .render_volunteer_activity(&rows, request.format, Utc::now())
            .map_err(|e| GenerateReportError::RenderError(e.to_string()))?;

        info!(rows = rows.len(), file = %file.file_name, "Volunteer activity report generated");
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::application::domain::{Event, VolunteerHistory};
    use crate::report::application::domain::{ActivityRecord, ReportFormat, ReportRange};
    use crate::report::application::ports::outgoing::{
        report_file_renderer::MockReportFileRenderer, reporting_query::MockReportingQuery,
        ReportingQueryError,
    };
    use crate::shared::domain::EventUrgency;
    use chrono::TimeZone;

    fn record(user: &str, event_name: &str, day: u32) -> ActivityRecord {
        let at = Utc.with_ymd_and_hms(2025, 2, day, 8, 0, 0).unwrap();
        let event = Event::rehydrate(
            format!("evt-{day}"),
            event_name,
            "desc",
            "loc",
            at,
            EventUrgency::Low,
            vec![],
        )
        .unwrap();

        ActivityRecord {
            history: VolunteerHistory::new(user, event.id(), at, 30).unwrap(),
            event,
            email: format!("{user}@example.com"),
            profile: None,
        }
    }

    fn file() -> ReportFile {
        ReportFile {
            file_name: "volunteer-activity-20250201000000.csv".into(),
            content_type: "text/csv",
            content: b"UserId\n".to_vec(),
        }
    }

    #[tokio::test]
    async fn renders_sorted_rows_in_requested_format() {
        let mut query = MockReportingQuery::new();
        query
            .expect_activity_in_range()
            .times(1)
            .returning(|_| Ok(vec![record("u2", "Later", 9), record("u1", "Sooner", 3)]));

        let mut renderer = MockReportFileRenderer::new();
        renderer
            .expect_render_volunteer_activity()
            .times(1)
            .withf(|rows, format, _| {
                *format == ReportFormat::Pdf
                    && rows.len() == 2
                    && rows[0].event_name == "Sooner"
                    && rows[1].user_id == "u2"
            })
            .returning(|_, _, _| Ok(file()));

        let service = VolunteerActivityReportService::new(query, renderer);
        let result = service
            .execute(ReportRequest {
                range: ReportRange::default(),
                format: ReportFormat::Pdf,
            })
            .await;

        assert_eq!(result, Ok(file()));
    }

    #[tokio::test]
    async fn inverted_range_is_rejected_before_querying() {
        let mut query = MockReportingQuery::new();
        query.expect_activity_in_range().times(0);
        let renderer = MockReportFileRenderer::new();

        let from = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

        let service = VolunteerActivityReportService::new(query, renderer);
        let result = service
            .execute(ReportRequest {
                range: ReportRange::new(Some(from), Some(to)),
                format: ReportFormat::Csv,
            })
            .await;

        assert_eq!(result, Err(GenerateReportError::InvalidRange));
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let mut query = MockReportingQuery::new();
        query
            .expect_activity_in_range()
            .returning(|_| Err(ReportingQueryError::DatabaseError("timeout".into())));
        let mut renderer = MockReportFileRenderer::new();
        renderer.expect_render_volunteer_activity().times(0);

        let service = VolunteerActivityReportService::new(query, renderer);
        let result = service
            .execute(ReportRequest {
                range: ReportRange::default(),
                format: ReportFormat::Csv,
            })
            .await;

        assert!(matches!(result, Err(GenerateReportError::QueryError(_))));
    }
}
