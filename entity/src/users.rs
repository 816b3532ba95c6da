use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::users::Model)] // OpenAPI schema
#[sea_orm(schema_name = "marquee", table_name = "users")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub id: Id,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    // Stored as a password-auth hash; never serialized back to clients.
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_deserializing)]
    pub credits: i64,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub updated_at: DateTimeWithTimeZone,
    // Populated by entity_api::user finders via find_with_related; not a column.
    #[sea_orm(ignore)]
    #[serde(skip_deserializing)]
    pub authorities: Vec<super::user_authorities::Model>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_authorities::Entity")]
    UserAuthorities,
    #[sea_orm(has_many = "super::user_venues::Entity")]
    UserVenues,
    #[sea_orm(has_many = "super::user_events::Entity")]
    UserEvents,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::user_authorities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAuthorities.def()
    }
}

impl Related<super::user_venues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserVenues.def()
    }
}

impl Related<super::user_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserEvents.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}
