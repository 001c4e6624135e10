pub mod renderer;
pub mod reporting_query_postgres;

pub use renderer::FileReportRenderer;
pub use reporting_query_postgres::ReportingQueryPostgres;
