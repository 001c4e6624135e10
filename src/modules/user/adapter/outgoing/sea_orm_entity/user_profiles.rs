use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    /// Same value as the owning `user_credentials.id`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    pub first_name: String,
    pub last_name: String,
    pub address_one: String,
    pub address_two: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "Text")]
    pub preferences: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub availability: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::user_credentials::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::user_credentials::Column::Id",
        on_delete = "Cascade"
    )]
    UserCredentials,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::user_credentials::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::UserCredentials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
