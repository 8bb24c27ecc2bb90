//! Referential integrity between genres and the categories they name.

use catalog_core::{
  category::CategoryId,
  repository::CategoryRepository,
  validation::{Notification, ValidationError, ValidationHandler},
};
use tracing::debug;

use crate::{Error, Result};

/// Check that every id in `ids` names a stored category.
///
/// Returns a notification holding at most one error, which lists the missing
/// ids joined by `", "` in their original order, duplicates included. An
/// empty list is accepted without touching the repository.
///
/// The check is best-effort: a category deleted between this call and the
/// commit that references it goes unnoticed.
pub async fn validate_categories<C>(
  categories: &C,
  ids: &[CategoryId],
) -> Result<Notification>
where
  C: CategoryRepository,
{
  let mut notification = Notification::create();
  if ids.is_empty() {
    return Ok(notification);
  }

  let found = categories
    .exists_by_ids(ids.to_vec())
    .await
    .map_err(Error::repository)?;

  let missing: Vec<&str> = ids
    .iter()
    .filter(|id| !found.contains(id))
    .map(CategoryId::as_str)
    .collect();

  if !missing.is_empty() {
    debug!(missing = missing.len(), "referenced categories not found");
    notification.append(ValidationError::new(format!(
      "Some categories could not be found: {}",
      missing.join(", ")
    )))?;
  }

  Ok(notification)
}
