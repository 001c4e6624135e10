//! Resets the database to a small, realistic data set for local development.
//!
//! Every seeded account shares the password in `SEED_PASSWORD` (default `Password123!`).

use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, Database, DatabaseConnection, EntityTrait};
use tracing::info;

use volunteer_hub::auth::adapter::outgoing::sea_orm_entity::user_credentials;
use volunteer_hub::auth::adapter::outgoing::{Argon2Hasher, CredentialsRepositoryPostgres};
use volunteer_hub::auth::application::domain::{UserCredentials, UserRole};
use volunteer_hub::auth::application::ports::outgoing::{CredentialsRepository, PasswordHasher};
use volunteer_hub::config::{load_env_files, AppConfig};
use volunteer_hub::event::adapter::outgoing::sea_orm_entity::{events, volunteer_history};
use volunteer_hub::event::adapter::outgoing::{
    EventRepositoryPostgres, VolunteerHistoryRepositoryPostgres,
};
use volunteer_hub::event::application::domain::{Event, VolunteerHistory};
use volunteer_hub::event::application::ports::outgoing::{
    EventRepository, VolunteerHistoryRepository,
};
use volunteer_hub::event::application::services::assignment_message;
use volunteer_hub::notification::adapter::outgoing::sea_orm_entity::notifications;
use volunteer_hub::notification::application::domain::Notification;
use volunteer_hub::shared::domain::datetime::to_db;
use volunteer_hub::shared::domain::{EventUrgency, VolunteerSkill};
use volunteer_hub::user::adapter::outgoing::sea_orm_entity::user_profiles;
use volunteer_hub::user::adapter::outgoing::ProfileRepositoryPostgres;
use volunteer_hub::user::application::domain::{ProfileDetails, UserProfile};
use volunteer_hub::user::application::ports::outgoing::ProfileRepository;

use VolunteerSkill::*;

struct SeedUser {
    email: &'static str,
    role: UserRole,
    first_name: &'static str,
    last_name: &'static str,
    address_one: &'static str,
    zip_code: &'static str,
    preferences: &'static str,
    skills: &'static [VolunteerSkill],
    availability: &'static [&'static str],
}

const USERS: &[SeedUser] = &[
    SeedUser {
        email: "admin1@example.com",
        role: UserRole::Admin,
        first_name: "Alex",
        last_name: "Admin",
        address_one: "100 Admin Plaza",
        zip_code: "77001",
        preferences: "Prefers dashboards and reporting",
        skills: &[ItSupport, EventPlanning],
        availability: &["Monday", "Wednesday"],
    },
    SeedUser {
        email: "admin2@example.com",
        role: UserRole::Admin,
        first_name: "Priya",
        last_name: "Coordinator",
        address_one: "200 Admin Way",
        zip_code: "77002",
        preferences: "Loves scheduling and logistics",
        skills: &[Construction, EventPlanning],
        availability: &["Tuesday", "Friday"],
    },
    SeedUser {
        email: "alex.johnson@example.com",
        role: UserRole::Volunteer,
        first_name: "Alex",
        last_name: "Johnson",
        address_one: "101 Maple St",
        zip_code: "77003",
        preferences: "Enjoys outdoor cleanups",
        skills: &[Gardening, Translation],
        availability: &["Tuesday", "Saturday"],
    },
    SeedUser {
        email: "priya.shah@example.com",
        role: UserRole::Volunteer,
        first_name: "Priya",
        last_name: "Shah",
        address_one: "202 Cedar Ln",
        zip_code: "77004",
        preferences: "Enjoys working with children",
        skills: &[ChildCare, ElderlyCare],
        availability: &["Wednesday", "Sunday"],
    },
    SeedUser {
        email: "marco.lee@example.com",
        role: UserRole::Volunteer,
        first_name: "Marco",
        last_name: "Lee",
        address_one: "303 Oak Dr",
        zip_code: "77005",
        preferences: "Likes hands-on work",
        skills: &[Driving, Construction],
        availability: &["Thursday"],
    },
    SeedUser {
        email: "jordan.rivera@example.com",
        role: UserRole::Volunteer,
        first_name: "Jordan",
        last_name: "Rivera",
        address_one: "404 Pine Ave",
        zip_code: "77006",
        preferences: "Enjoys community-facing work",
        skills: &[ElderlyCare, EventPlanning],
        availability: &["Tuesday", "Thursday"],
    },
    SeedUser {
        email: "sam.taylor@example.com",
        role: UserRole::Volunteer,
        first_name: "Sam",
        last_name: "Taylor",
        address_one: "505 Birch Rd",
        zip_code: "77007",
        preferences: "Good with logistics and setup",
        skills: &[LegalAid, MedicalAid],
        availability: &["Friday", "Monday"],
    },
    SeedUser {
        email: "maria.garcia@example.com",
        role: UserRole::Volunteer,
        first_name: "Maria",
        last_name: "Garcia",
        address_one: "606 Elm St",
        zip_code: "77008",
        preferences: "Interested in health and safety",
        skills: &[Teaching, Photography],
        availability: &["Saturday", "Tuesday"],
    },
];

/// Deletes children before parents.
async fn reset(db: &DatabaseConnection) -> anyhow::Result<()> {
    volunteer_history::Entity::delete_many().exec(db).await?;
    notifications::Entity::delete_many().exec(db).await?;
    events::Entity::delete_many().exec(db).await?;
    user_profiles::Entity::delete_many().exec(db).await?;
    user_credentials::Entity::delete_many().exec(db).await?;
    info!("Existing data deleted");
    Ok(())
}

async fn seed_users(
    db: &Arc<DatabaseConnection>,
    password: &str,
) -> anyhow::Result<Vec<UserCredentials>> {
    let hasher = Argon2Hasher::new();
    let accounts = CredentialsRepositoryPostgres::new(Arc::clone(db));
    let profiles = ProfileRepositoryPostgres::new(Arc::clone(db));

    let password_hash = hasher.hash_password(password).await?;
    let mut users = Vec::with_capacity(USERS.len());

    for seed in USERS {
        let credentials = UserCredentials::new(seed.email, &password_hash, seed.role)?;
        let welcome = Notification::new(
            credentials.id(),
            match seed.role {
                UserRole::Admin => "Welcome, Admin! Your dashboard is ready.",
                UserRole::Volunteer => "Thanks for signing up to volunteer!",
            },
        )?;
        accounts.create_account(&credentials, &welcome).await?;

        let profile = UserProfile::new(
            credentials.id(),
            ProfileDetails {
                first_name: seed.first_name.to_string(),
                last_name: seed.last_name.to_string(),
                address_one: seed.address_one.to_string(),
                address_two: None,
                city: "Houston".to_string(),
                state: "TX".to_string(),
                zip_code: seed.zip_code.to_string(),
                skills: seed.skills.to_vec(),
                preferences: seed.preferences.to_string(),
                availability: seed.availability.iter().map(|s| s.to_string()).collect(),
            },
        )?;
        profiles.create(&profile).await?;

        users.push(credentials);
    }

    info!("Seeded {} users with profiles", users.len());
    Ok(users)
}

async fn seed_events(db: &Arc<DatabaseConnection>) -> anyhow::Result<Vec<Event>> {
    let repo = EventRepositoryPostgres::new(Arc::clone(db));
    let now = Utc::now();
    let year = now.year();
    let on = |y: i32, m: u32, d: u32, h: u32, min: u32| {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .context("invalid seed date")
    };

    let events = vec![
        // Past, for history and reports
        Event::new(
            "Community Clean-Up",
            "Help pick up litter and refresh the local park and creek trail.",
            "Central Park",
            now - Duration::days(30),
            EventUrgency::Medium,
            vec![Gardening, Construction],
        )?,
        Event::new(
            "Food Drive Assistance",
            "Sort donations and assemble food boxes for local families.",
            "2nd Street Community Center",
            now - Duration::days(20),
            EventUrgency::High,
            vec![Driving, ElderlyCare],
        )?,
        Event::new(
            "Elderly Care Visit",
            "Spend time with residents, play games, and chat.",
            "Sunrise Care Home",
            now - Duration::days(10),
            EventUrgency::Low,
            vec![ElderlyCare],
        )?,
        Event::new(
            "Community Garden Workday",
            "Weed, mulch, and plant at the neighborhood community garden.",
            "Greenway Community Garden",
            now - Duration::days(5),
            EventUrgency::Medium,
            vec![Gardening],
        )?,
        // Upcoming, for matching
        Event::new(
            "Tree Planting Day",
            "Plant native trees along the riverfront.",
            "Riverfront Trailhead",
            now + Duration::days(5),
            EventUrgency::Medium,
            vec![Gardening, ChildCare],
        )?,
        Event::new(
            "After-School Tutoring",
            "Support students with homework and educational games.",
            "Westside Youth Center",
            now + Duration::days(10),
            EventUrgency::Medium,
            vec![ChildCare, Teaching],
        )?,
        Event::new(
            "Mobile Health Clinic Support",
            "Help with check-in and logistics at a mobile clinic.",
            "Eastside Parking Lot",
            now + Duration::days(15),
            EventUrgency::High,
            vec![MedicalAid, Translation],
        )?,
        Event::new(
            "Disaster Relief Packing",
            "Prepare emergency supply kits for disaster response.",
            "Relief Center Warehouse",
            now + Duration::days(20),
            EventUrgency::Critical,
            vec![Driving, Construction],
        )?,
        Event::new(
            "Senior Holiday Visits",
            "Spend time visiting seniors during the holiday season.",
            "Golden Years Living Center",
            on(year + 1, 12, 20, 14, 0)?,
            EventUrgency::Low,
            vec![ElderlyCare],
        )?,
        Event::new(
            "New Year Community Kickoff",
            "Help host a community gathering to welcome the new year.",
            "City Plaza",
            on(year + 1, 1, 4, 18, 0)?,
            EventUrgency::Medium,
            vec![EventPlanning, ItSupport],
        )?,
    ];

    for event in &events {
        repo.create(event).await?;
    }

    info!("Seeded {} events", events.len());
    Ok(events)
}

async fn seed_reminders(db: &DatabaseConnection, users: &[UserCredentials]) -> anyhow::Result<()> {
    let mut count = 0;
    for user in users.iter().filter(|u| u.is_volunteer()) {
        let reminder =
            Notification::new(user.id(), "Reminder: You have upcoming volunteer opportunities.")?;

        notifications::Entity::insert(notifications::ActiveModel {
            id: Set(reminder.id().to_string()),
            user_id: Set(reminder.user_id().to_string()),
            message: Set(reminder.message().to_string()),
            is_read: Set(reminder.is_read()),
            created_at: Set(to_db(&reminder.created_at())),
        })
        .exec_without_returning(db)
        .await?;
        count += 1;
    }

    info!("Seeded {} reminder notifications", count);
    Ok(())
}

/// Each volunteer gets up to three past events, with varied durations.
async fn seed_history(
    db: &Arc<DatabaseConnection>,
    users: &[UserCredentials],
    events: &[Event],
) -> anyhow::Result<()> {
    let repo = VolunteerHistoryRepositoryPostgres::new(Arc::clone(db));
    let now = Utc::now();

    let volunteers: Vec<&UserCredentials> = users.iter().filter(|u| u.is_volunteer()).collect();
    let mut past: Vec<&Event> = events.iter().filter(|e| e.date_utc() <= now).collect();
    past.sort_by_key(|e| e.date_utc());

    if past.is_empty() || volunteers.is_empty() {
        info!("No past events or volunteers to seed history for");
        return Ok(());
    }

    let mut count = 0;
    for (i, volunteer) in volunteers.iter().enumerate() {
        let assigned = past
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % volunteers.len() == i || *idx == i % past.len())
            .map(|(_, e)| *e)
            .take(3);

        for event in assigned {
            let history = VolunteerHistory::new(
                volunteer.id(),
                event.id(),
                event.date_utc(),
                120 + (i as i32) * 30,
            )?;
            let notice = Notification::new(
                volunteer.id(),
                &assignment_message(event.name(), event.date_utc()),
            )?;
            repo.record_assignment(&history, &notice).await?;
            count += 1;
        }
    }

    info!("Seeded {} volunteer history records", count);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let rust_env = load_env_files();
    anyhow::ensure!(
        rust_env != "production",
        "refusing to wipe and seed a production database"
    );

    let config = AppConfig::from_env(rust_env)?;
    let password = std::env::var("SEED_PASSWORD").unwrap_or_else(|_| "Password123!".to_string());

    let db = Arc::new(
        Database::connect(config.database.connect_options())
            .await
            .context("failed to connect to database")?,
    );

    info!("Applying migrations...");
    Migrator::up(&*db, None).await?;

    info!("Resetting data...");
    reset(&db).await?;

    info!("Seeding data...");
    let users = seed_users(&db, &password).await?;
    let events = seed_events(&db).await?;
    seed_reminders(&db, &users).await?;
    seed_history(&db, &users, &events).await?;

    info!("Done");
    Ok(())
}
