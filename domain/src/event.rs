use crate::error::Error;
use crate::events::Model;
pub use entity_api::event::{create, delete_by_id, find_by_id, update};
use entity_api::IntoQueryFilterMap;
use entity_api::{events, query};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let events =
        query::find_by::<events::Entity, events::Column>(db, params.into_query_filter_map())
            .await?;

    Ok(events)
}

pub async fn find_by_paginated(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
    page: u64,
    per_page: u64,
) -> Result<Vec<Model>, Error> {
    let events = query::find_by_paginated::<events::Entity, events::Column>(
        db,
        params.into_query_filter_map(),
        page,
        per_page,
    )
    .await?;

    Ok(events)
}
