use async_trait::async_trait;

use super::report_request::{GenerateReportError, ReportRequest};
use crate::report::application::domain::ReportFile;

#[async_trait]
pub trait GenerateEventAssignmentsReportUseCase: Send + Sync {
    async fn execute(&self, request: ReportRequest) -> Result<ReportFile, GenerateReportError>;
}
