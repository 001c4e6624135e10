use crate::report::application::domain::{ReportFormat, ReportRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub range: ReportRange,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateReportError {
    #[error("fromUtc must not be later than toUtc.")]
    InvalidRange,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}
