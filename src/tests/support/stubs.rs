use async_trait::async_trait;

use crate::auth::application::domain::{AuthOutcome, SessionDirective};
use crate::auth::application::ports::incoming::use_cases::{
    AuthorizationDecision, AuthorizationError, AuthorizeUseCase, LoginCommand, LoginError,
    LoginUseCase, LogoutError, LogoutUseCase, Requirement, SignupCommand, SignupError,
    SignupUseCase,
};
use crate::event::application::mappers::{EventDto, VolunteerHistoryDto};
use crate::event::application::ports::incoming::use_cases::{
    AssignVolunteerCommand, AssignVolunteerError, AssignVolunteerResult, AssignVolunteerUseCase,
    GetEventAssignmentsError, GetEventAssignmentsUseCase, GetUpcomingEventsError,
    GetUpcomingEventsUseCase, GetVolunteerHistoryError, GetVolunteerHistoryUseCase,
    UpsertEventCommand, UpsertEventError, UpsertEventUseCase,
};
use crate::matching::application::mappers::VolunteerMatchDto;
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingEventsError, GetMatchingEventsUseCase, GetMatchingVolunteersError,
    GetMatchingVolunteersUseCase,
};
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsError, ListNotificationsUseCase, MarkAllReadError, MarkAllReadUseCase,
    NotificationDto,
};
use crate::report::application::domain::ReportFile;
use crate::report::application::ports::incoming::use_cases::{
    GenerateEventAssignmentsReportUseCase, GenerateReportError,
    GenerateVolunteerActivityReportUseCase, ReportRequest,
};
use crate::user::application::mappers::UserDto;
use crate::user::application::ports::incoming::use_cases::{
    GetCurrentUserError, GetCurrentUserUseCase, UpdateUserError, UpdateUserPatch,
    UpdateUserUseCase,
};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthOutcome, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSignupUseCase;

#[async_trait]
impl SignupUseCase for StubSignupUseCase {
    async fn execute(&self, _command: SignupCommand) -> Result<AuthOutcome, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _user_id: &str) -> Result<SessionDirective, LogoutError> {
        Ok(SessionDirective::Clear)
    }
}

/// Grants only the listed subjects. The default instance denies everyone.
#[derive(Default, Clone)]
pub struct StubAuthorizeUseCase {
    granted: Vec<String>,
}

impl StubAuthorizeUseCase {
    pub fn granting(subjects: &[&str]) -> Self {
        Self {
            granted: subjects.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl AuthorizeUseCase for StubAuthorizeUseCase {
    async fn execute(
        &self,
        _requirement: Requirement,
        subject: Option<&str>,
    ) -> Result<AuthorizationDecision, AuthorizationError> {
        Ok(match subject {
            Some(s) if self.granted.iter().any(|g| g == s) => AuthorizationDecision::Granted,
            _ => AuthorizationDecision::Denied,
        })
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubUpsertEventUseCase;

#[async_trait]
impl UpsertEventUseCase for StubUpsertEventUseCase {
    async fn execute(&self, _command: UpsertEventCommand) -> Result<EventDto, UpsertEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAssignVolunteerUseCase;

#[async_trait]
impl AssignVolunteerUseCase for StubAssignVolunteerUseCase {
    async fn execute(
        &self,
        _command: AssignVolunteerCommand,
    ) -> Result<Option<AssignVolunteerResult>, AssignVolunteerError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUpcomingEventsUseCase;

#[async_trait]
impl GetUpcomingEventsUseCase for StubGetUpcomingEventsUseCase {
    async fn execute(&self) -> Result<Vec<EventDto>, GetUpcomingEventsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetVolunteerHistoryUseCase;

#[async_trait]
impl GetVolunteerHistoryUseCase for StubGetVolunteerHistoryUseCase {
    async fn execute(
        &self,
        _user_id: &str,
    ) -> Result<Vec<VolunteerHistoryDto>, GetVolunteerHistoryError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetEventAssignmentsUseCase;

#[async_trait]
impl GetEventAssignmentsUseCase for StubGetEventAssignmentsUseCase {
    async fn execute(&self, _event_id: &str) -> Result<Vec<String>, GetEventAssignmentsError> {
        Ok(vec![])
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubListNotificationsUseCase;

#[async_trait]
impl ListNotificationsUseCase for StubListNotificationsUseCase {
    async fn execute(
        &self,
        _user_id: &str,
    ) -> Result<Vec<NotificationDto>, ListNotificationsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubMarkAllReadUseCase;

#[async_trait]
impl MarkAllReadUseCase for StubMarkAllReadUseCase {
    async fn execute(&self, _user_id: &str) -> Result<u64, MarkAllReadError> {
        Ok(0)
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubGetCurrentUserUseCase;

#[async_trait]
impl GetCurrentUserUseCase for StubGetCurrentUserUseCase {
    async fn execute(&self, _user_id: &str) -> Result<Option<UserDto>, GetCurrentUserError> {
        Ok(None)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: &str,
        _patch: UpdateUserPatch,
    ) -> Result<UserDto, UpdateUserError> {
        Err(UpdateUserError::UserNotFound)
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubVolunteerActivityReportUseCase;

#[async_trait]
impl GenerateVolunteerActivityReportUseCase for StubVolunteerActivityReportUseCase {
    async fn execute(&self, _request: ReportRequest) -> Result<ReportFile, GenerateReportError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEventAssignmentsReportUseCase;

#[async_trait]
impl GenerateEventAssignmentsReportUseCase for StubEventAssignmentsReportUseCase {
    async fn execute(&self, _request: ReportRequest) -> Result<ReportFile, GenerateReportError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubGetMatchingVolunteersUseCase;

#[async_trait]
impl GetMatchingVolunteersUseCase for StubGetMatchingVolunteersUseCase {
    async fn execute(&self) -> Result<Vec<VolunteerMatchDto>, GetMatchingVolunteersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetMatchingEventsUseCase;

#[async_trait]
impl GetMatchingEventsUseCase for StubGetMatchingEventsUseCase {
    async fn execute(&self) -> Result<Vec<EventDto>, GetMatchingEventsError> {
        Ok(vec![])
    }
}
