use crate::error::Error;
use crate::organizers::Model;
pub use entity_api::organizer::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{organizers, query};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let organizers = query::find_by::<organizers::Entity, organizers::Column>(
        db,
        params.into_query_filter_map(),
    )
    .await?;

    Ok(organizers)
}
