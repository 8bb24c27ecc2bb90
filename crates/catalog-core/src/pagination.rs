//! Search parameters and paged results shared by the repository traits.

use serde::{Deserialize, Serialize};

/// Sort direction for [`SearchQuery::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  #[default]
  Asc,
  Desc,
}

/// Parameters for a paged listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
  /// Zero-based page index.
  pub page:      u32,
  pub per_page:  u32,
  /// Free-text filter; blank means no filter.
  pub terms:     String,
  /// Field to sort by (`name`, `createdAt`, `updatedAt`).
  pub sort:      String,
  pub direction: Direction,
}

impl Default for SearchQuery {
  fn default() -> Self {
    Self {
      page:      0,
      per_page:  10,
      terms:     String::new(),
      sort:      "name".to_owned(),
      direction: Direction::Asc,
    }
  }
}

/// Categories are searched with the same parameters as genres.
pub type CategorySearchQuery = SearchQuery;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
  pub current_page: u32,
  pub per_page:     u32,
  /// Number of matching items across all pages.
  pub total:        u64,
  pub items:        Vec<T>,
}

impl<T> Pagination<T> {
  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
    Pagination {
      current_page: self.current_page,
      per_page:     self.per_page,
      total:        self.total,
      items:        self.items.into_iter().map(f).collect(),
    }
  }
}
