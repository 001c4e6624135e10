use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::ports::incoming::use_cases::{
    AuthorizeUseCase, LoginUseCase, LogoutUseCase, SignupUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::event::application::ports::incoming::use_cases::{
    AssignVolunteerUseCase, GetEventAssignmentsUseCase, GetUpcomingEventsUseCase,
    GetVolunteerHistoryUseCase, UpsertEventUseCase,
};
use crate::event::application::EventUseCases;
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingEventsUseCase, GetMatchingVolunteersUseCase,
};
use crate::matching::application::MatchingUseCases;
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsUseCase, MarkAllReadUseCase,
};
use crate::notification::application::NotificationUseCases;
use crate::report::application::ports::incoming::use_cases::{
    GenerateEventAssignmentsReportUseCase, GenerateVolunteerActivityReportUseCase,
};
use crate::report::application::ReportUseCases;
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    GetCurrentUserUseCase, UpdateUserUseCase,
};
use crate::user::application::UserUseCases;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub unless replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    event: EventUseCases,
    user: UserUseCases,
    notification: NotificationUseCases,
    report: ReportUseCases,
    matching: MatchingUseCases,
    session_cookie: SessionCookieConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                signup: Arc::new(StubSignupUseCase),
                logout: Arc::new(StubLogoutUseCase),
                authorize: Arc::new(StubAuthorizeUseCase::default()),
            },
            event: EventUseCases {
                upsert: Arc::new(StubUpsertEventUseCase),
                assign_volunteer: Arc::new(StubAssignVolunteerUseCase),
                upcoming: Arc::new(StubGetUpcomingEventsUseCase),
                history: Arc::new(StubGetVolunteerHistoryUseCase),
                assignments: Arc::new(StubGetEventAssignmentsUseCase),
            },
            user: UserUseCases {
                get_current: Arc::new(StubGetCurrentUserUseCase),
                update: Arc::new(StubUpdateUserUseCase),
            },
            notification: NotificationUseCases {
                list: Arc::new(StubListNotificationsUseCase),
                mark_all_read: Arc::new(StubMarkAllReadUseCase),
            },
            report: ReportUseCases {
                volunteer_activity: Arc::new(StubVolunteerActivityReportUseCase),
                event_assignments: Arc::new(StubEventAssignmentsReportUseCase),
            },
            matching: MatchingUseCases {
                volunteers: Arc::new(StubGetMatchingVolunteersUseCase),
                events: Arc::new(StubGetMatchingEventsUseCase),
            },
            session_cookie: SessionCookieConfig::default(),
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_login(mut self, uc: impl LoginUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_signup(mut self, uc: impl SignupUseCase + 'static) -> Self {
        self.auth.signup = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_authorize(mut self, uc: impl AuthorizeUseCase + 'static) -> Self {
        self.auth.authorize = Arc::new(uc);
        self
    }

    // Events

    pub fn with_upsert_event(mut self, uc: impl UpsertEventUseCase + 'static) -> Self {
        self.event.upsert = Arc::new(uc);
        self
    }

    pub fn with_assign_volunteer(mut self, uc: impl AssignVolunteerUseCase + 'static) -> Self {
        self.event.assign_volunteer = Arc::new(uc);
        self
    }

    pub fn with_upcoming_events(mut self, uc: impl GetUpcomingEventsUseCase + 'static) -> Self {
        self.event.upcoming = Arc::new(uc);
        self
    }

    pub fn with_volunteer_history(
        mut self,
        uc: impl GetVolunteerHistoryUseCase + 'static,
    ) -> Self {
        self.event.history = Arc::new(uc);
        self
    }

    pub fn with_event_assignments(
        mut self,
        uc: impl GetEventAssignmentsUseCase + 'static,
    ) -> Self {
        self.event.assignments = Arc::new(uc);
        self
    }

    // Notifications

    pub fn with_list_notifications(
        mut self,
        uc: impl ListNotificationsUseCase + 'static,
    ) -> Self {
        self.notification.list = Arc::new(uc);
        self
    }

    pub fn with_mark_all_read(mut self, uc: impl MarkAllReadUseCase + 'static) -> Self {
        self.notification.mark_all_read = Arc::new(uc);
        self
    }

    // User

    pub fn with_get_current_user(mut self, uc: impl GetCurrentUserUseCase + 'static) -> Self {
        self.user.get_current = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    // Reports

    pub fn with_volunteer_activity_report(
        mut self,
        uc: impl GenerateVolunteerActivityReportUseCase + 'static,
    ) -> Self {
        self.report.volunteer_activity = Arc::new(uc);
        self
    }

    pub fn with_event_assignments_report(
        mut self,
        uc: impl GenerateEventAssignmentsReportUseCase + 'static,
    ) -> Self {
        self.report.event_assignments = Arc::new(uc);
        self
    }

    // Matching

    pub fn with_matching_volunteers(
        mut self,
        uc: impl GetMatchingVolunteersUseCase + 'static,
    ) -> Self {
        self.matching.volunteers = Arc::new(uc);
        self
    }

    pub fn with_matching_events(mut self, uc: impl GetMatchingEventsUseCase + 'static) -> Self {
        self.matching.events = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            event: self.event,
            user: self.user,
            notification: self.notification,
            report: self.report,
            matching: self.matching,
            session_cookie: self.session_cookie,
        })
    }
}
