//! Genre use cases.
//!
//! Create and update collect two independent sources into one
//! [`Notification`]: first the reference check on the supplied category ids,
//! then the genre's own self-validation. Reference errors therefore always
//! precede name errors. Repository faults are not folded in; they surface as
//! [`Error::Repository`].

use catalog_core::{
  category::CategoryId,
  genre::{Genre, GenreId},
  pagination::{Pagination, SearchQuery},
  repository::{CategoryRepository, GenreRepository},
  validation::{Notification, ValidationHandler},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{Error, Result, references::validate_categories};

const ENTITY: &str = "Genre";

// ─── Outputs ─────────────────────────────────────────────────────────────────

/// Identifier of a created or updated genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreIdOutput {
  pub id: GenreId,
}

impl From<&Genre> for GenreIdOutput {
  fn from(genre: &Genre) -> Self { Self { id: genre.id().clone() } }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreOutput {
  pub id:         GenreId,
  pub name:       Option<String>,
  pub is_active:  bool,
  pub categories: Vec<CategoryId>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreOutput {
  fn from(g: Genre) -> Self {
    Self {
      id:         g.id().clone(),
      name:       g.name().map(str::to_owned),
      is_active:  g.is_active(),
      categories: g.categories().to_vec(),
      created_at: g.created_at(),
      updated_at: g.updated_at(),
      deleted_at: g.deleted_at(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreListOutput {
  pub id:         GenreId,
  pub name:       Option<String>,
  pub is_active:  bool,
  pub categories: Vec<CategoryId>,
  pub created_at: DateTime<Utc>,
  pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
  fn from(g: Genre) -> Self {
    Self {
      id:         g.id().clone(),
      name:       g.name().map(str::to_owned),
      is_active:  g.is_active(),
      categories: g.categories().to_vec(),
      created_at: g.created_at(),
      deleted_at: g.deleted_at(),
    }
  }
}

fn to_category_ids(ids: Vec<String>) -> Vec<CategoryId> {
  ids.into_iter().map(CategoryId::from).collect()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
  pub name:       Option<String>,
  pub active:     bool,
  pub categories: Vec<String>,
}

impl CreateGenreCommand {
  /// A missing `active` flag means active.
  pub fn with(
    name: Option<String>,
    active: Option<bool>,
    categories: Vec<String>,
  ) -> Self {
    Self { name, active: active.unwrap_or(true), categories }
  }
}

pub struct CreateGenreUseCase<'a, C, G> {
  categories: &'a C,
  genres:     &'a G,
}

impl<'a, C, G> CreateGenreUseCase<'a, C, G>
where
  C: CategoryRepository,
  G: GenreRepository,
{
  pub fn new(categories: &'a C, genres: &'a G) -> Self {
    Self { categories, genres }
  }

  pub async fn execute(&self, command: CreateGenreCommand) -> Result<GenreIdOutput> {
    debug!(name = ?command.name, "creating genre");
    let category_ids = to_category_ids(command.categories);

    let mut notification = Notification::create();
    notification
      .append_all(&validate_categories(self.categories, &category_ids).await?)?;
    let genre =
      notification.validate(|| Genre::new_genre(command.name, command.active))?;

    let genre = match genre {
      Some(genre) if !notification.has_error() => {
        genre.add_categories(Some(category_ids))
      }
      _ => {
        warn!(errors = notification.errors().len(), "genre rejected");
        return Err(notification.into_error("Could not create Aggregate Genre").into());
      }
    };

    let stored = self
      .genres
      .create(genre)
      .await
      .map_err(Error::repository)?;
    info!(id = %stored.id(), "genre created");
    Ok(GenreIdOutput::from(&stored))
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
  pub id:         String,
  pub name:       Option<String>,
  pub active:     bool,
  pub categories: Vec<String>,
}

pub struct UpdateGenreUseCase<'a, C, G> {
  categories: &'a C,
  genres:     &'a G,
}

impl<'a, C, G> UpdateGenreUseCase<'a, C, G>
where
  C: CategoryRepository,
  G: GenreRepository,
{
  pub fn new(categories: &'a C, genres: &'a G) -> Self {
    Self { categories, genres }
  }

  /// Fails with a not-found error, before any validation, when no genre has
  /// the given id.
  pub async fn execute(&self, command: UpdateGenreCommand) -> Result<GenreIdOutput> {
    let id = GenreId::from(command.id);
    debug!(%id, "updating genre");

    let genre = self
      .genres
      .find_by_id(id.clone())
      .await
      .map_err(Error::repository)?
      .ok_or_else(|| catalog_core::Error::not_found(ENTITY, &id))?;

    let category_ids = to_category_ids(command.categories);

    let mut notification = Notification::create();
    notification
      .append_all(&validate_categories(self.categories, &category_ids).await?)?;
    let genre = notification
      .validate(|| genre.update(command.name, command.active, category_ids))?;

    let genre = match genre {
      Some(genre) if !notification.has_error() => genre,
      _ => {
        warn!(%id, errors = notification.errors().len(), "genre update rejected");
        return Err(
          notification
            .into_error(format!("Could not update Aggregate Genre {id}"))
            .into(),
        );
      }
    };

    let stored = self
      .genres
      .update(genre)
      .await
      .map_err(Error::repository)?;
    info!(%id, "genre updated");
    Ok(GenreIdOutput::from(&stored))
  }
}

// ─── Get ─────────────────────────────────────────────────────────────────────

pub struct GetGenreByIdUseCase<'a, G> {
  genres: &'a G,
}

impl<'a, G: GenreRepository> GetGenreByIdUseCase<'a, G> {
  pub fn new(genres: &'a G) -> Self { Self { genres } }

  pub async fn execute(&self, id: &str) -> Result<GenreOutput> {
    let id = GenreId::from(id);
    self
      .genres
      .find_by_id(id.clone())
      .await
      .map_err(Error::repository)?
      .map(GenreOutput::from)
      .ok_or_else(|| catalog_core::Error::not_found(ENTITY, id).into())
  }
}

// ─── List ────────────────────────────────────────────────────────────────────

pub struct ListGenresUseCase<'a, G> {
  genres: &'a G,
}

impl<'a, G: GenreRepository> ListGenresUseCase<'a, G> {
  pub fn new(genres: &'a G) -> Self { Self { genres } }

  pub async fn execute(
    &self,
    query: &SearchQuery,
  ) -> Result<Pagination<GenreListOutput>> {
    let page = self.genres.find_all(query).await.map_err(Error::repository)?;
    Ok(page.map(GenreListOutput::from))
  }
}

// ─── Delete ──────────────────────────────────────────────────────────────────

pub struct DeleteGenreUseCase<'a, G> {
  genres: &'a G,
}

impl<'a, G: GenreRepository> DeleteGenreUseCase<'a, G> {
  pub fn new(genres: &'a G) -> Self { Self { genres } }

  /// Deleting an unknown id succeeds.
  pub async fn execute(&self, id: &str) -> Result<()> {
    let id = GenreId::from(id);
    self
      .genres
      .delete_by_id(id.clone())
      .await
      .map_err(Error::repository)?;
    info!(%id, "genre deleted");
    Ok(())
  }
}
