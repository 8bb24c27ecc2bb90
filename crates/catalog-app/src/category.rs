//! Category use cases.
//!
//! Create and update validate the aggregate into a [`Notification`] and
//! report every error at once. A fault raised by the repository while
//! persisting is folded into the same shape: a notification failure whose
//! only error is the fault's message.

use catalog_core::{
  category::{Category, CategoryId},
  pagination::{CategorySearchQuery, Pagination},
  repository::CategoryRepository,
  validation::{Notification, ValidationHandler},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{Error, Result};

const ENTITY: &str = "Category";

// ─── Outputs ─────────────────────────────────────────────────────────────────

/// Identifier of a created or updated category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryIdOutput {
  pub id: CategoryId,
}

impl From<&Category> for CategoryIdOutput {
  fn from(category: &Category) -> Self { Self { id: category.id().clone() } }
}

/// Full read model of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
  pub id:          CategoryId,
  pub name:        Option<String>,
  pub description: Option<String>,
  pub is_active:   bool,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
  pub deleted_at:  Option<DateTime<Utc>>,
}

impl From<Category> for CategoryOutput {
  fn from(c: Category) -> Self {
    Self {
      id:          c.id().clone(),
      name:        c.name().map(str::to_owned),
      description: c.description().map(str::to_owned),
      is_active:   c.is_active(),
      created_at:  c.created_at(),
      updated_at:  c.updated_at(),
      deleted_at:  c.deleted_at(),
    }
  }
}

/// Listing row for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
  pub id:          CategoryId,
  pub name:        Option<String>,
  pub description: Option<String>,
  pub is_active:   bool,
  pub created_at:  DateTime<Utc>,
  pub deleted_at:  Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
  fn from(c: Category) -> Self {
    Self {
      id:          c.id().clone(),
      name:        c.name().map(str::to_owned),
      description: c.description().map(str::to_owned),
      is_active:   c.is_active(),
      created_at:  c.created_at(),
      deleted_at:  c.deleted_at(),
    }
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
  pub name:        Option<String>,
  pub description: Option<String>,
  pub active:      bool,
}

pub struct CreateCategoryUseCase<'a, R> {
  repository: &'a R,
}

impl<'a, R: CategoryRepository> CreateCategoryUseCase<'a, R> {
  pub fn new(repository: &'a R) -> Self { Self { repository } }

  pub async fn execute(
    &self,
    command: CreateCategoryCommand,
  ) -> Result<CategoryIdOutput> {
    debug!(name = ?command.name, "creating category");

    let category = Category::new_category(
      command.name,
      command.description,
      command.active,
    );

    let mut notification = Notification::create();
    category.validate(&mut notification)?;
    if notification.has_error() {
      warn!(errors = notification.errors().len(), "category rejected");
      return Err(notification.into_error("Could not create Aggregate Category").into());
    }

    match self.repository.create(category).await {
      Ok(stored) => {
        info!(id = %stored.id(), "category created");
        Ok(CategoryIdOutput::from(&stored))
      }
      Err(e) => {
        warn!(error = %e, "failed to persist category");
        Err(
          Notification::from_failure(&e)
            .into_error("Could not create Aggregate Category")
            .into(),
        )
      }
    }
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
  pub id:          String,
  pub name:        Option<String>,
  pub description: Option<String>,
  pub active:      bool,
}

pub struct UpdateCategoryUseCase<'a, R> {
  repository: &'a R,
}

impl<'a, R: CategoryRepository> UpdateCategoryUseCase<'a, R> {
  pub fn new(repository: &'a R) -> Self { Self { repository } }

  /// Fails with a not-found error when no category has the given id.
  pub async fn execute(
    &self,
    command: UpdateCategoryCommand,
  ) -> Result<CategoryIdOutput> {
    let id = CategoryId::from(command.id);
    debug!(%id, "updating category");

    let category = self
      .repository
      .find_by_id(id.clone())
      .await
      .map_err(Error::repository)?
      .ok_or_else(|| catalog_core::Error::not_found(ENTITY, &id))?;

    let category =
      category.update(command.name, command.description, command.active);

    let message = format!("Could not update Aggregate Category {id}");
    let mut notification = Notification::create();
    category.validate(&mut notification)?;
    if notification.has_error() {
      warn!(%id, errors = notification.errors().len(), "category update rejected");
      return Err(notification.into_error(message).into());
    }

    match self.repository.update(category).await {
      Ok(stored) => {
        info!(%id, "category updated");
        Ok(CategoryIdOutput::from(&stored))
      }
      Err(e) => {
        warn!(%id, error = %e, "failed to persist category update");
        Err(Notification::from_failure(&e).into_error(message).into())
      }
    }
  }
}

// ─── Get ─────────────────────────────────────────────────────────────────────

pub struct GetCategoryByIdUseCase<'a, R> {
  repository: &'a R,
}

impl<'a, R: CategoryRepository> GetCategoryByIdUseCase<'a, R> {
  pub fn new(repository: &'a R) -> Self { Self { repository } }

  pub async fn execute(&self, id: &str) -> Result<CategoryOutput> {
    let id = CategoryId::from(id);
    self
      .repository
      .find_by_id(id.clone())
      .await
      .map_err(Error::repository)?
      .map(CategoryOutput::from)
      .ok_or_else(|| catalog_core::Error::not_found(ENTITY, id).into())
  }
}

// ─── List ────────────────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<'a, R> {
  repository: &'a R,
}

impl<'a, R: CategoryRepository> ListCategoriesUseCase<'a, R> {
  pub fn new(repository: &'a R) -> Self { Self { repository } }

  pub async fn execute(
    &self,
    query: &CategorySearchQuery,
  ) -> Result<Pagination<CategoryListOutput>> {
    let page = self
      .repository
      .find_all(query)
      .await
      .map_err(Error::repository)?;
    Ok(page.map(CategoryListOutput::from))
  }
}

// ─── Delete ──────────────────────────────────────────────────────────────────

pub struct DeleteCategoryUseCase<'a, R> {
  repository: &'a R,
}

impl<'a, R: CategoryRepository> DeleteCategoryUseCase<'a, R> {
  pub fn new(repository: &'a R) -> Self { Self { repository } }

  /// Deleting an unknown id succeeds.
  pub async fn execute(&self, id: &str) -> Result<()> {
    let id = CategoryId::from(id);
    self
      .repository
      .delete_by_id(id.clone())
      .await
      .map_err(Error::repository)?;
    info!(%id, "category deleted");
    Ok(())
  }
}
