//! Error type for `catalog-store-sqlite`.

use catalog_core::{category::CategoryId, genre::GenreId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] catalog_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// An update addressed a category that is not stored.
  #[error("category not found: {0}")]
  CategoryNotFound(CategoryId),

  /// An update addressed a genre that is not stored.
  #[error("genre not found: {0}")]
  GenreNotFound(GenreId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
