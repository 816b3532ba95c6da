use crate::error::Error;
use crate::people::Model;
pub use entity_api::person::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{people, query};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let people =
        query::find_by::<people::Entity, people::Column>(db, params.into_query_filter_map())
            .await?;

    Ok(people)
}
