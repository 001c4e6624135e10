use actix_web::{get, web, Responder};
use tracing::warn;

use super::report_query::{report_response, ReportQueryParams};
use crate::api::schemas::{ErrorResponse, ReportAttachment};
use crate::auth::adapter::incoming::web::extractors::{AdminPolicy, Authorized};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Download the event assignments report
#[utoipa::path(
    get,
    path = "/reports/events",
    tag = "reports",
    params(ReportQueryParams),
    responses(
        (status = 200, description = "CSV (default) or PDF attachment", content(
            (ReportAttachment = "text/csv"),
            (ReportAttachment = "application/pdf")
        )),
        (status = 400, description = "Invalid date range", body = ErrorResponse),
        (status = 403, description = "Admins only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/reports/events")]
pub async fn event_assignments_report_handler(
    _caller: Authorized<AdminPolicy>,
    query: web::Query<ReportQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match query.to_request() {
        Ok(request) => request,
        Err(message) => {
            warn!("Rejected event assignments report query: {}", message);
            return ApiResponse::validation_error(&message);
        }
    };

    let result = data.report.event_assignments.execute(request).await;
    report_response("event assignments", result)
}
