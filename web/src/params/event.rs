use crate::params::DEFAULT_PER_PAGE;
use domain::Id;
use sea_orm::Value;
use serde::Deserialize;
use utoipa::IntoParams;

use domain::{IntoQueryFilterMap, QueryFilterMap};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    #[param(value_type = Option<Uuid>)]
    pub(crate) production_id: Option<Id>,
    #[param(value_type = Option<Uuid>)]
    pub(crate) venue_id: Option<Id>,
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
            "production_id".to_string(),
            self.production_id.map(|id| Value::Uuid(Some(Box::new(id)))),
        );
        query_filter_map.insert(
            "venue_id".to_string(),
            self.venue_id.map(|id| Value::Uuid(Some(Box::new(id)))),
        );

        query_filter_map
    }
}
