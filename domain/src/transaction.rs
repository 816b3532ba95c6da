use crate::error::Error;
use crate::transactions::Model;
pub use entity_api::transaction::{create, find_by_id, find_by_user};
use entity_api::IntoQueryFilterMap;
use entity_api::{query, transactions};
use sea_orm::DatabaseConnection;

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let transactions = query::find_by::<transactions::Entity, transactions::Column>(
        db,
        params.into_query_filter_map(),
    )
    .await?;

    Ok(transactions)
}
