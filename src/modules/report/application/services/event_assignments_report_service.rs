use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::report::application::domain::{build_event_reports, ReportFile};
use crate::report::application::ports::{
    incoming::use_cases::{
        GenerateEventAssignmentsReportUseCase, GenerateReportError, ReportRequest,
    },
    outgoing::{ReportFileRenderer, ReportingQuery, ReportingQueryError},
};

fn query_err(e: ReportingQueryError) -> GenerateReportError {
    GenerateReportError::QueryError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct EventAssignmentsReportService<Q, F>
where
    Q: ReportingQuery + Send + Sync,
    F: ReportFileRenderer + Send + Sync,
{
    query: Q,
    renderer: F,
}

impl<Q, F> EventAssignmentsReportService<Q, F>
where
    Q: ReportingQuery + Send + Sync,
    F: ReportFileRenderer + Send + Sync,
{
    pub fn new(query: Q, renderer: F) -> Self {
        Self { query, renderer }
    }
}

#[async_trait]
impl<Q, F> GenerateEventAssignmentsReportUseCase for EventAssignmentsReportService<Q, F>
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
            .map_err(query_err)?;
        let scheduled = self
            .query
            .events_in_range(request.range)
            .await
            .map_err(query_err)?;

        let reports = build_event_reports(&records, &scheduled);

        let file = self
            .renderer
            .render_event_assignments(&reports, request.format, Utc::now())
            .map_err(|e| GenerateReportError::RenderError(e.to_string()))?;

        info!(events = reports.len(), file = %file.file_name, "Event assignments report generated");
        Ok(file)
    }
}
