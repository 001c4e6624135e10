use actix_web::HttpResponse;
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::report::application::domain::{ReportFile, ReportFormat, ReportRange};
use crate::report::application::ports::incoming::use_cases::{GenerateReportError, ReportRequest};
use crate::shared::api::ApiResponse;
use crate::shared::domain::datetime::parse_utc;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReportQueryParams {
    /// Inclusive lower bound on the participation date (ISO-8601)
    pub from_utc: Option<String>,
    /// Inclusive upper bound on the participation date (ISO-8601)
    pub to_utc: Option<String>,
    /// `csv` (default) or `pdf`
    pub format: Option<String>,
}

fn parse_bound(name: &str, raw: Option<&str>) -> Result<Option<chrono::DateTime<chrono::Utc>>, String> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(value) => parse_utc(value)
            .map(Some)
            .ok_or_else(|| format!("Invalid {name} value '{value}'.")),
    }
}

impl ReportQueryParams {
    pub fn to_request(&self) -> Result<ReportRequest, String> {
        let from_utc = parse_bound("fromUtc", self.from_utc.as_deref())?;
        let to_utc = parse_bound("toUtc", self.to_utc.as_deref())?;

        Ok(ReportRequest {
            range: ReportRange::new(from_utc, to_utc),
            format: ReportFormat::from_query(self.format.as_deref()),
        })
    }
}

pub(super) fn report_response(
    report: &str,
    result: Result<ReportFile, GenerateReportError>,
) -> HttpResponse {
    match result {
        Ok(file) => ApiResponse::attachment(&file.file_name, file.content_type, file.content),
        Err(e @ GenerateReportError::InvalidRange) => ApiResponse::validation_error(&e.to_string()),
        Err(e) => {
            error!("Failed to generate {} report: {}", report, e);
            ApiResponse::internal_error()
        }
    }
}
