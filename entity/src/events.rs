use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::events::Model)] // OpenAPI schema
#[sea_orm(schema_name = "marquee", table_name = "events")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub id: Id,
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub production_id: Id,
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub venue_id: Id,
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub starts_at: DateTimeWithTimeZone,
    // Denormalized convenience flag; the authoritative record of ownership is
    // the user_events link. Kept consistent inside the claim transaction.
    #[serde(skip_deserializing)]
    pub is_claimed: bool,
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
        belongs_to = "super::productions::Entity",
        from = "Column::ProductionId",
        to = "super::productions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Productions,
    #[sea_orm(
        belongs_to = "super::venues::Entity",
        from = "Column::VenueId",
        to = "super::venues::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Venues,
    #[sea_orm(has_many = "super::user_events::Entity")]
    UserEvents,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::productions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productions.def()
    }
}

impl Related<super::venues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venues.def()
    }
}

impl Related<super::user_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserEvents.def()
    }
}
