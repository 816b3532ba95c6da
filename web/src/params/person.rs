use sea_orm::Value;
use serde::Deserialize;
use utoipa::IntoParams;

use domain::{IntoQueryFilterMap, QueryFilterMap};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert(
            "first_name".to_string(),
            self.first_name
                .map(|first_name| Value::String(Some(Box::new(first_name)))),
        );
        query_filter_map.insert(
            "last_name".to_string(),
            self.last_name
                .map(|last_name| Value::String(Some(Box::new(last_name)))),
        );

        query_filter_map
    }
}
