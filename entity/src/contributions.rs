use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Records that a person performed a given role in a given production.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::contributions::Model)] // OpenAPI schema
#[sea_orm(schema_name = "marquee", table_name = "contributions")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub id: Id,
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub person_id: Id,
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub production_id: Id,
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub role_id: Id,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PersonId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
    #[sea_orm(
        belongs_to = "super::productions::Entity",
        from = "Column::ProductionId",
        to = "super::productions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Productions,
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::RoleId",
        to = "super::roles::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Roles,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::productions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productions.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}
