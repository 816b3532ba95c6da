use domain::Id;
use sea_orm::Value;
use serde::Deserialize;
use utoipa::IntoParams;

use domain::{IntoQueryFilterMap, QueryFilterMap};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    #[param(value_type = Option<Uuid>)]
    pub(crate) person_id: Option<Id>,
    #[param(value_type = Option<Uuid>)]
    pub(crate) production_id: Option<Id>,
    #[param(value_type = Option<Uuid>)]
    pub(crate) role_id: Option<Id>,
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert(
            "person_id".to_string(),
            self.person_id.map(|id| Value::Uuid(Some(Box::new(id)))),
        );
        query_filter_map.insert(
            "production_id".to_string(),
            self.production_id.map(|id| Value::Uuid(Some(Box::new(id)))),
        );
        query_filter_map.insert(
            "role_id".to_string(),
            self.role_id.map(|id| Value::Uuid(Some(Box::new(id)))),
        );

        query_filter_map
    }
}
