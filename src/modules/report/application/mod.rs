pub mod domain;
pub mod ports;
pub mod report_use_cases;
pub mod services;

pub use report_use_cases::ReportUseCases;
