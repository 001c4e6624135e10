use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_user_credentials_table::UserCredentials;
use crate::m20251001_000003_create_events_table::Events;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VolunteerHistory::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VolunteerHistory::UserId).string_len(32).not_null())
                    .col(ColumnDef::new(VolunteerHistory::EventId).string_len(32).not_null())
                    .col(
                        ColumnDef::new(VolunteerHistory::DateUtc)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VolunteerHistory::DurationMinutes)
                            .integer()
                            .not_null()
                            .check(Expr::col(VolunteerHistory::DurationMinutes).gt(0)),
                    )
                    .col(
                        ColumnDef::new(VolunteerHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_history_user_id")
                            .from(VolunteerHistory::Table, VolunteerHistory::UserId)
                            .to(UserCredentials::Table, UserCredentials::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_history_event_id")
                            .from(VolunteerHistory::Table, VolunteerHistory::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One assignment per (volunteer, event). Insert-or-ignore relies on it.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_volunteer_history_user_event
                ON volunteer_history (user_id, event_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_volunteer_history_user_date
                ON volunteer_history (user_id, date_utc);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_volunteer_history_date
                ON volunteer_history (date_utc);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_volunteer_history_user_event;
                DROP INDEX IF EXISTS idx_volunteer_history_user_date;
                DROP INDEX IF EXISTS idx_volunteer_history_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VolunteerHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VolunteerHistory {
    Table,
    Id,
    UserId,
    EventId,
    DateUtc,
    DurationMinutes,
    CreatedAt,
}
