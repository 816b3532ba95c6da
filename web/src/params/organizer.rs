use sea_orm::Value;
use serde::Deserialize;
use utoipa::IntoParams;

use domain::{IntoQueryFilterMap, QueryFilterMap};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) name: Option<String>,
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert(
            "name".to_string(),
            self.name.map(|name| Value::String(Some(Box::new(name)))),
        );

        query_filter_map
    }
}
