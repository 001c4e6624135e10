use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub location: String,

    pub date_utc: DateTimeWithTimeZone,

    pub urgency: String,

    /// JSONB array of skill labels.
    #[sea_orm(column_type = "JsonBinary")]
    pub required_skills: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::volunteer_history::Entity")]
    VolunteerHistory,
}

impl Related<super::volunteer_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolunteerHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
