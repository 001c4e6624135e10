use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_user_credentials_table::UserCredentials;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(UserProfiles::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(UserProfiles::AddressOne).string_len(255).not_null())
                    .col(ColumnDef::new(UserProfiles::AddressTwo).string_len(255))
                    .col(ColumnDef::new(UserProfiles::City).string_len(100).not_null())
                    .col(ColumnDef::new(UserProfiles::State).string_len(2).not_null())
                    .col(ColumnDef::new(UserProfiles::ZipCode).string_len(9).not_null())
                    .col(
                        ColumnDef::new(UserProfiles::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Preferences)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Availability)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_user_id")
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(UserCredentials::Table, UserCredentials::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    UserId,
    FirstName,
    LastName,
    AddressOne,
    AddressTwo,
    City,
    State,
    ZipCode,
    Skills,
    Preferences,
    Availability,
}
