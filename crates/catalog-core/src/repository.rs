//! The repository traits through which use cases reach storage.
//!
//! Implemented by storage backends (e.g. `catalog-store-sqlite`). Use cases
//! depend on this abstraction, not on any concrete backend.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  category::{Category, CategoryId},
  genre::{Genre, GenreId},
  pagination::{CategorySearchQuery, Pagination, SearchQuery},
};

// ─── Categories ──────────────────────────────────────────────────────────────

pub trait CategoryRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new category and return it as stored.
  fn create(
    &self,
    category: Category,
  ) -> impl Future<Output = Result<Category, Self::Error>> + Send + '_;

  /// Overwrite a stored category and return it as stored.
  fn update(
    &self,
    category: Category,
  ) -> impl Future<Output = Result<Category, Self::Error>> + Send + '_;

  /// Returns `None` if not found.
  fn find_by_id(
    &self,
    id: CategoryId,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  /// Return the subset of `ids` that exist.
  fn exists_by_ids(
    &self,
    ids: Vec<CategoryId>,
  ) -> impl Future<Output = Result<Vec<CategoryId>, Self::Error>> + Send + '_;

  /// Deleting an unknown id is not an error.
  fn delete_by_id(
    &self,
    id: CategoryId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Terms match against name or description.
  fn find_all<'a>(
    &'a self,
    query: &'a CategorySearchQuery,
  ) -> impl Future<Output = Result<Pagination<Category>, Self::Error>> + Send + 'a;
}

// ─── Genres ──────────────────────────────────────────────────────────────────

pub trait GenreRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn create(
    &self,
    genre: Genre,
  ) -> impl Future<Output = Result<Genre, Self::Error>> + Send + '_;

  fn update(
    &self,
    genre: Genre,
  ) -> impl Future<Output = Result<Genre, Self::Error>> + Send + '_;

  fn find_by_id(
    &self,
    id: GenreId,
  ) -> impl Future<Output = Result<Option<Genre>, Self::Error>> + Send + '_;

  fn delete_by_id(
    &self,
    id: GenreId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Terms match against the name.
  fn find_all<'a>(
    &'a self,
    query: &'a SearchQuery,
  ) -> impl Future<Output = Result<Pagination<Genre>, Self::Error>> + Send + 'a;
}
