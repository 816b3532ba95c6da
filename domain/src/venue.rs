use crate::error::Error;
use crate::venues::Model;
pub use entity_api::venue::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{query, venues};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let venues =
        query::find_by::<venues::Entity, venues::Column>(db, params.into_query_filter_map())
            .await?;

    Ok(venues)
}

pub async fn find_by_paginated(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
    page: u64,
    per_page: u64,
) -> Result<Vec<Model>, Error> {
    let venues = query::find_by_paginated::<venues::Entity, venues::Column>(
        db,
        params.into_query_filter_map(),
        page,
        per_page,
    )
    .await?;

    Ok(venues)
}
