//! Query-string parameters shared by the list endpoints.
//!
//! `?search=<terms>&page=<n>&per_page=<n>&sort=<field>&dir=asc|desc`

use catalog_core::pagination::{Direction, SearchQuery};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub search:   String,
  #[serde(default)]
  pub page:     u32,
  pub per_page: Option<u32>,
  pub sort:     Option<String>,
  pub dir:      Option<Direction>,
}

impl ListParams {
  /// Fill in defaults and reject an empty page size.
  pub fn into_query(self) -> Result<SearchQuery, ApiError> {
    let defaults = SearchQuery::default();
    let per_page = self.per_page.unwrap_or(defaults.per_page);
    if per_page == 0 {
      return Err(ApiError::BadRequest("per_page must be at least 1".into()));
    }
    Ok(SearchQuery {
      page: self.page,
      per_page,
      terms: self.search,
      sort: self.sort.unwrap_or(defaults.sort),
      direction: self.dir.unwrap_or(defaults.direction),
    })
  }
}
