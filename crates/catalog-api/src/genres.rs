//! Handlers for `/genres` endpoints.
//!
//! Create and update check every referenced category id against the
//! category repository before touching the genre.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use catalog_app::genre::{
  CreateGenreCommand, CreateGenreUseCase, DeleteGenreUseCase, GenreIdOutput,
  GenreListOutput, GenreOutput, GetGenreByIdUseCase, ListGenresUseCase,
  UpdateGenreCommand, UpdateGenreUseCase,
};
use catalog_core::{
  pagination::Pagination,
  repository::{CategoryRepository, GenreRepository},
};
use serde::Deserialize;

use crate::{error::ApiError, search::ListParams};

/// Request body for create and update.
///
/// `{"name":"Acao","is_active":true,"categories_id":["<category id>"]}`
#[derive(Debug, Deserialize)]
pub struct GenreBody {
  pub name:          Option<String>,
  #[serde(alias = "active")]
  pub is_active:     Option<bool>,
  #[serde(default, alias = "categories")]
  pub categories_id: Vec<String>,
}

/// `GET /genres`
pub async fn list<S: GenreRepository>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Pagination<GenreListOutput>>, ApiError> {
  let query = params.into_query()?;
  let page = ListGenresUseCase::new(store.as_ref()).execute(&query).await?;
  Ok(Json(page))
}

/// `POST /genres`
pub async fn create<S: CategoryRepository + GenreRepository>(
  State(store): State<Arc<S>>,
  Json(body): Json<GenreBody>,
) -> Result<impl IntoResponse, ApiError> {
  let output = CreateGenreUseCase::new(store.as_ref(), store.as_ref())
    .execute(CreateGenreCommand::with(body.name, body.is_active, body.categories_id))
    .await?;
  Ok((StatusCode::CREATED, Json(output)))
}

/// `GET /genres/:id`
pub async fn get_one<S: GenreRepository>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<GenreOutput>, ApiError> {
  let output = GetGenreByIdUseCase::new(store.as_ref()).execute(&id).await?;
  Ok(Json(output))
}

/// `PUT /genres/:id`
pub async fn update<S: CategoryRepository + GenreRepository>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<GenreBody>,
) -> Result<Json<GenreIdOutput>, ApiError> {
  let output = UpdateGenreUseCase::new(store.as_ref(), store.as_ref())
    .execute(UpdateGenreCommand {
      id,
      name:       body.name,
      active:     body.is_active.unwrap_or(true),
      categories: body.categories_id,
    })
    .await?;
  Ok(Json(output))
}

/// `DELETE /genres/:id`
pub async fn delete<S: GenreRepository>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
  DeleteGenreUseCase::new(store.as_ref()).execute(&id).await?;
  Ok(StatusCode::NO_CONTENT)
}
