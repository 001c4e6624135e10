pub mod report_file_renderer;
pub mod reporting_query;

pub use report_file_renderer::{ReportFileRenderer, ReportRenderError};
pub use reporting_query::{ReportingQuery, ReportingQueryError};
