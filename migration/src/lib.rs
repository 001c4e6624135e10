pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_credentials_table;
mod m20251001_000002_create_user_profiles_table;
mod m20251001_000003_create_events_table;
mod m20251001_000004_create_notifications_table;
mod m20251001_000005_create_volunteer_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_credentials_table::Migration),
            Box::new(m20251001_000002_create_user_profiles_table::Migration),
            Box::new(m20251001_000003_create_events_table::Migration),
            Box::new(m20251001_000004_create_notifications_table::Migration),
            Box::new(m20251001_000005_create_volunteer_history_table::Migration),
        ]
    }
}
