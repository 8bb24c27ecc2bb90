//! Handlers for `/categories` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/categories` | See [`ListParams`] |
//! | `POST`   | `/categories` | Body: `{"name":"Filmes","description":null,"is_active":true}` |
//! | `GET`    | `/categories/:id` | 404 if not found |
//! | `PUT`    | `/categories/:id` | Same body as `POST` |
//! | `DELETE` | `/categories/:id` | Always 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use catalog_app::category::{
  CategoryIdOutput, CategoryListOutput, CategoryOutput, CreateCategoryCommand,
  CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase,
  ListCategoriesUseCase, UpdateCategoryCommand, UpdateCategoryUseCase,
};
use catalog_core::{pagination::Pagination, repository::CategoryRepository};
use serde::Deserialize;

use crate::{error::ApiError, search::ListParams};

/// Request body for create and update. `is_active` defaults to `true`.
#[derive(Debug, Deserialize)]
pub struct CategoryBody {
  pub name:        Option<String>,
  pub description: Option<String>,
  #[serde(alias = "active")]
  pub is_active:   Option<bool>,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /categories`
pub async fn list<S: CategoryRepository>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Pagination<CategoryListOutput>>, ApiError> {
  let query = params.into_query()?;
  let page = ListCategoriesUseCase::new(store.as_ref()).execute(&query).await?;
  Ok(Json(page))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /categories`
pub async fn create<S: CategoryRepository>(
  State(store): State<Arc<S>>,
  Json(body): Json<CategoryBody>,
) -> Result<impl IntoResponse, ApiError> {
  let output = CreateCategoryUseCase::new(store.as_ref())
    .execute(CreateCategoryCommand {
      name:        body.name,
      description: body.description,
      active:      body.is_active.unwrap_or(true),
    })
    .await?;
  Ok((StatusCode::CREATED, Json(output)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /categories/:id`
pub async fn get_one<S: CategoryRepository>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<CategoryOutput>, ApiError> {
  let output = GetCategoryByIdUseCase::new(store.as_ref()).execute(&id).await?;
  Ok(Json(output))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /categories/:id`
pub async fn update<S: CategoryRepository>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<CategoryBody>,
) -> Result<Json<CategoryIdOutput>, ApiError> {
  let output = UpdateCategoryUseCase::new(store.as_ref())
    .execute(UpdateCategoryCommand {
      id,
      name:        body.name,
      description: body.description,
      active:      body.is_active.unwrap_or(true),
    })
    .await?;
  Ok(Json(output))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /categories/:id`
pub async fn delete<S: CategoryRepository>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
  DeleteCategoryUseCase::new(store.as_ref()).execute(&id).await?;
  Ok(StatusCode::NO_CONTENT)
}
