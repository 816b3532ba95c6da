use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role names a user account may hold. Stored as a Postgres enum; the string
/// values double as the `role` claim minted into access tokens.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "authority")]
pub enum Authority {
    #[sea_orm(string_value = "user")]
    #[serde(rename = "user")]
    #[default]
    User,
    #[sea_orm(string_value = "admin")]
    #[serde(rename = "admin")]
    Admin,
    #[sea_orm(string_value = "developer")]
    #[serde(rename = "developer")]
    Developer,
    #[sea_orm(string_value = "claims manager")]
    #[serde(rename = "claims manager")]
    ClaimsManager,
}

impl std::fmt::Display for Authority {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authority::User => write!(fmt, "user"),
            Authority::Admin => write!(fmt, "admin"),
            Authority::Developer => write!(fmt, "developer"),
            Authority::ClaimsManager => write!(fmt, "claims manager"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::user_authorities::Model)] // OpenAPI schema
#[sea_orm(schema_name = "marquee", table_name = "user_authorities")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub id: Id,
    #[serde(skip_deserializing)]
    #[schema(value_type = Uuid)] // Applies to OpenAPI schema
    pub user_id: Id,
    pub authority: Authority,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}
