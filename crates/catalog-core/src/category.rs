//! Category: a catalog classification with an active/inactive lifecycle.
//!
//! A category never validates itself. Mutations are unchecked and the caller
//! decides when to run [`Category::validate`] and with which handler.

use chrono::{DateTime, Utc};

pub use crate::id::CategoryId;
use crate::{
  Result,
  validation::{ValidationHandler, Validator, check_name},
};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

// ─── Aggregate ───────────────────────────────────────────────────────────────

/// A category aggregate. Mutators consume the value and return the updated
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
  id:          CategoryId,
  name:        Option<String>,
  description: Option<String>,
  active:      bool,
  created_at:  DateTime<Utc>,
  updated_at:  DateTime<Utc>,
  /// Set while the category is inactive.
  deleted_at:  Option<DateTime<Utc>>,
}

impl Category {
  /// Create a category with a fresh identifier. An inactive category is
  /// stamped as deleted at creation time.
  pub fn new_category(
    name: Option<String>,
    description: Option<String>,
    active: bool,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: CategoryId::unique(),
      name,
      description,
      active,
      created_at: now,
      updated_at: now,
      deleted_at: (!active).then_some(now),
    }
  }

  /// Reconstitute a stored category exactly as given.
  pub fn with(
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
  ) -> Self {
    Self { id, name, description, active, created_at, updated_at, deleted_at }
  }

  pub fn activate(mut self) -> Self {
    self.deleted_at = None;
    self.active = true;
    self.updated_at = Utc::now();
    self
  }

  /// Keeps the original `deleted_at` if the category was already inactive.
  pub fn deactivate(mut self) -> Self {
    let now = Utc::now();
    self.deleted_at.get_or_insert(now);
    self.active = false;
    self.updated_at = now;
    self
  }

  pub fn update(
    self,
    name: Option<String>,
    description: Option<String>,
    active: bool,
  ) -> Self {
    let mut category = if active { self.activate() } else { self.deactivate() };
    category.name = name;
    category.description = description;
    category.updated_at = Utc::now();
    category
  }

  pub fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<()> {
    CategoryValidator::new(self, handler).validate()
  }

  pub fn id(&self) -> &CategoryId { &self.id }

  pub fn name(&self) -> Option<&str> { self.name.as_deref() }

  pub fn description(&self) -> Option<&str> { self.description.as_deref() }

  pub fn is_active(&self) -> bool { self.active }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  pub fn deleted_at(&self) -> Option<DateTime<Utc>> { self.deleted_at }
}

// ─── Validator ───────────────────────────────────────────────────────────────

/// Name rules: present, not blank, trimmed length within
/// [`NAME_MIN_LENGTH`]..=[`NAME_MAX_LENGTH`].
pub struct CategoryValidator<'a> {
  category: &'a Category,
  handler:  &'a mut dyn ValidationHandler,
}

impl<'a> CategoryValidator<'a> {
  pub fn new(
    category: &'a Category,
    handler: &'a mut dyn ValidationHandler,
  ) -> Self {
    Self { category, handler }
  }
}

impl Validator for CategoryValidator<'_> {
  fn validate(self) -> Result<()> {
    check_name(
      self.category.name(),
      NAME_MIN_LENGTH..=NAME_MAX_LENGTH,
      "'name' must be between 3 and 255 characters",
      self.handler,
    )
  }
}
