use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::organizers::Model)] // OpenAPI schema
#[sea_orm(schema_name = "marquee", table_name = "organizers")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub id: Id,
    pub name: String,
    pub contact_email: Option<String>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::productions::Entity")]
    Productions,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::productions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productions.def()
    }
}
