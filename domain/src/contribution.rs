use crate::contributions::Model;
use crate::error::Error;
pub use entity_api::contribution::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{contributions, query};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let contributions = query::find_by::<contributions::Entity, contributions::Column>(
        db,
        params.into_query_filter_map(),
    )
    .await?;

    Ok(contributions)
}
