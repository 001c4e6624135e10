use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use volunteer_hub::api::openapi::ApiDoc;
use volunteer_hub::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use volunteer_hub::auth::adapter::outgoing::{
    Argon2Hasher, CredentialsRepositoryPostgres, JwtConfig, JwtTokenService, UserReadStorePostgres,
};
use volunteer_hub::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use volunteer_hub::auth::application::services::{
    AuthorizationService, LoginService, LogoutService, SignupService,
};
use volunteer_hub::auth::application::AuthUseCases;
use volunteer_hub::config::{load_env_files, AppConfig};
use volunteer_hub::event::adapter::outgoing::{
    EventRepositoryPostgres, VolunteerHistoryRepositoryPostgres,
};
use volunteer_hub::event::application::services::{
    AssignVolunteerService, GetEventAssignmentsService, GetUpcomingEventsService,
    GetVolunteerHistoryService, UpsertEventService,
};
use volunteer_hub::event::application::EventUseCases;
use volunteer_hub::matching::adapter::outgoing::VolunteerDirectoryPostgres;
use volunteer_hub::matching::application::services::{
    GetMatchingEventsService, GetMatchingVolunteersService,
};
use volunteer_hub::matching::application::MatchingUseCases;
use volunteer_hub::notification::adapter::outgoing::NotificationRepositoryPostgres;
use volunteer_hub::notification::application::services::{
    ListNotificationsService, MarkAllReadService,
};
use volunteer_hub::notification::application::NotificationUseCases;
use volunteer_hub::report::adapter::outgoing::{FileReportRenderer, ReportingQueryPostgres};
use volunteer_hub::report::application::services::{
    EventAssignmentsReportService, VolunteerActivityReportService,
};
use volunteer_hub::report::application::ReportUseCases;
use volunteer_hub::shared::api::{custom_json_config, custom_query_config};
use volunteer_hub::user::adapter::outgoing::ProfileRepositoryPostgres;
use volunteer_hub::user::application::services::{GetCurrentUserService, UpdateUserService};
use volunteer_hub::user::application::UserUseCases;
use volunteer_hub::{init_routes, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let rust_env = load_env_files();
    let config = AppConfig::from_env(rust_env).context("invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let hasher = Argon2Hasher::from_env().context("invalid Argon2 configuration")?;

    // Database connection
    let conn = Database::connect(config.database.connect_options())
        .await
        .context("failed to connect to database")?;
    let db_arc = Arc::new(conn);

    if config.run_migrations {
        Migrator::up(&*db_arc, None)
            .await
            .context("failed to apply migrations")?;
        info!("Migrations applied");
    }

    // Adapters
    let user_read_store = UserReadStorePostgres::new(Arc::clone(&db_arc));
    let credentials_repo = CredentialsRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let history_repo = VolunteerHistoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let notification_repo = NotificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let reporting_query = ReportingQueryPostgres::new(Arc::clone(&db_arc));
    let volunteer_directory = VolunteerDirectoryPostgres::new(Arc::clone(&db_arc));
    let renderer = FileReportRenderer::new();

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(hasher);

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(LoginService::new(
                user_read_store.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            signup: Arc::new(SignupService::new(
                user_read_store.clone(),
                credentials_repo,
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            logout: Arc::new(LogoutService::new()),
            authorize: Arc::new(AuthorizationService::new(user_read_store.clone())),
        },
        event: EventUseCases {
            upsert: Arc::new(UpsertEventService::new(event_repo.clone())),
            assign_volunteer: Arc::new(AssignVolunteerService::new(
                event_repo.clone(),
                history_repo.clone(),
                user_read_store.clone(),
            )),
            upcoming: Arc::new(GetUpcomingEventsService::new(event_repo.clone())),
            history: Arc::new(GetVolunteerHistoryService::new(
                event_repo.clone(),
                history_repo.clone(),
            )),
            assignments: Arc::new(GetEventAssignmentsService::new(history_repo)),
        },
        user: UserUseCases {
            get_current: Arc::new(GetCurrentUserService::new(
                user_read_store.clone(),
                profile_repo.clone(),
            )),
            update: Arc::new(UpdateUserService::new(user_read_store, profile_repo)),
        },
        notification: NotificationUseCases {
            list: Arc::new(ListNotificationsService::new(notification_repo.clone())),
            mark_all_read: Arc::new(MarkAllReadService::new(notification_repo)),
        },
        report: ReportUseCases {
            volunteer_activity: Arc::new(VolunteerActivityReportService::new(
                reporting_query.clone(),
                renderer,
            )),
            event_assignments: Arc::new(EventAssignmentsReportService::new(
                reporting_query,
                renderer,
            )),
        },
        matching: MatchingUseCases {
            volunteers: Arc::new(GetMatchingVolunteersService::new(volunteer_directory)),
            events: Arc::new(GetMatchingEventsService::new(event_repo)),
        },
        session_cookie: SessionCookieConfig {
            secure: config.cookie_secure,
        },
    };

    let expose_docs = !config.is_production();
    if !expose_docs {
        warn!("Swagger UI disabled in production");
    }

    let server_url = config.bind_address();
    info!("Server listening on {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes);

        if expose_docs {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
