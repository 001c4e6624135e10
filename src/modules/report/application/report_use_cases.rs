use std::sync::Arc;

use crate::report::application::ports::incoming::use_cases::{
    GenerateEventAssignmentsReportUseCase, GenerateVolunteerActivityReportUseCase,
};

#[derive(Clone)]
pub struct ReportUseCases {
    pub volunteer_activity: Arc<dyn GenerateVolunteerActivityReportUseCase + Send + Sync>,
    pub event_assignments: Arc<dyn GenerateEventAssignmentsReportUseCase + Send + Sync>,
}
