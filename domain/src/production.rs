use crate::error::Error;
use crate::productions::Model;
pub use entity_api::production::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{productions, query};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let productions = query::find_by::<productions::Entity, productions::Column>(
        db,
        params.into_query_filter_map(),
    )
    .await?;

    Ok(productions)
}
