use crate::error::Error;
use crate::roles::Model;
pub use entity_api::role::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{query, roles};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let roles =
        query::find_by::<roles::Entity, roles::Column>(db, params.into_query_filter_map()).await?;

    Ok(roles)
}
