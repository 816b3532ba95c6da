use crate::params::DEFAULT_PER_PAGE;
use sea_orm::Value;
use serde::Deserialize;
use utoipa::IntoParams;

use domain::{IntoQueryFilterMap, QueryFilterMap};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) city: Option<String>,
    pub(crate) name: Option<String>,
    /// Zero-based page number.
    pub(crate) page: Option<u64>,
    pub(crate) per_page: Option<u64>,
}

impl IndexParams {
    pub(crate) fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub(crate) fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert(
            "city".to_string(),
            self.city.map(|city| Value::String(Some(Box::new(city)))),
        );
        query_filter_map.insert(
            "name".to_string(),
            self.name.map(|name| Value::String(Some(Box::new(name)))),
        );

        query_filter_map
    }
}
