use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every successful JSON response.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every 4xx/5xx JSON response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code. One of `VALIDATION_ERROR`, `ID_MISMATCH`, `INVALID_CREDENTIALS`,
    /// `MISSING_AUTH_TOKEN`, `INVALID_TOKEN`, `INVALID_SESSION`, `UNAUTHORIZED`,
    /// `FORBIDDEN`, `EMAIL_ALREADY_EXISTS`, `EVENT_NOT_FOUND`, `USER_NOT_FOUND`,
    /// `NOT_FOUND`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Safe to show to the user.
    #[schema(example = "Name is required.")]
    pub message: String,
}

/// Report file body, sent with `Content-Disposition: attachment`.
#[derive(ToSchema)]
#[schema(value_type = String, format = Binary)]
pub struct ReportAttachment(pub Vec<u8>);
