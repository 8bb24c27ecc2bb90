//! Genre: a catalog grouping that references categories by identifier.
//!
//! Unlike [`Category`](crate::category::Category), a genre validates itself
//! on every construction path and on [`Genre::update`]: an invalid genre is
//! never handed back to the caller.

use chrono::{DateTime, Utc};

pub use crate::id::GenreId;
use crate::{
  Result,
  id::CategoryId,
  validation::{Notification, ValidationHandler, Validator, check_name},
};

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 255;

const INVALID_GENRE: &str = "Failed to create a Aggregate Genre";

// ─── Aggregate ───────────────────────────────────────────────────────────────

/// A genre aggregate. The category list is ordered and may hold duplicates;
/// the genre does not own those categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
  id:         GenreId,
  name:       Option<String>,
  active:     bool,
  categories: Vec<CategoryId>,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
  /// Create a genre with a fresh identifier and no categories.
  pub fn new_genre(name: Option<String>, active: bool) -> Result<Self> {
    let now = Utc::now();
    Self {
      id: GenreId::unique(),
      name,
      active,
      categories: Vec::new(),
      created_at: now,
      updated_at: now,
      deleted_at: (!active).then_some(now),
    }
    .self_validate()
  }

  /// Reconstitute a genre from its parts. Still validated.
  pub fn with(
    id: GenreId,
    name: Option<String>,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
  ) -> Result<Self> {
    Self { id, name, active, categories, created_at, updated_at, deleted_at }
      .self_validate()
  }

  pub fn activate(mut self) -> Self {
    self.deleted_at = None;
    self.active = true;
    self.updated_at = Utc::now();
    self
  }

  /// Keeps the original `deleted_at` if the genre was already inactive.
  pub fn deactivate(mut self) -> Self {
    let now = Utc::now();
    self.deleted_at.get_or_insert(now);
    self.active = false;
    self.updated_at = now;
    self
  }

  /// Replace name, status, and categories, then re-validate.
  pub fn update(
    self,
    name: Option<String>,
    active: bool,
    categories: Vec<CategoryId>,
  ) -> Result<Self> {
    let mut genre = if active { self.activate() } else { self.deactivate() };
    genre.name = name;
    genre.categories = categories;
    genre.updated_at = Utc::now();
    genre.self_validate()
  }

  /// `None` leaves the genre untouched, `updated_at` included.
  pub fn add_category(mut self, id: Option<CategoryId>) -> Self {
    if let Some(id) = id {
      self.categories.push(id);
      self.updated_at = Utc::now();
    }
    self
  }

  /// An absent or empty list leaves the genre untouched.
  pub fn add_categories(mut self, ids: Option<Vec<CategoryId>>) -> Self {
    match ids {
      Some(ids) if !ids.is_empty() => {
        self.categories.extend(ids);
        self.updated_at = Utc::now();
        self
      }
      _ => self,
    }
  }

  /// Removes the first occurrence of `id`. `None` leaves the genre untouched.
  pub fn remove_category(mut self, id: Option<&CategoryId>) -> Self {
    if let Some(id) = id {
      if let Some(position) = self.categories.iter().position(|c| c == id) {
        self.categories.remove(position);
      }
      self.updated_at = Utc::now();
    }
    self
  }

  pub fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<()> {
    GenreValidator::new(self, handler).validate()
  }

  fn self_validate(self) -> Result<Self> {
    let mut notification = Notification::create();
    self.validate(&mut notification)?;
    notification.into_result(INVALID_GENRE)?;
    Ok(self)
  }

  pub fn id(&self) -> &GenreId { &self.id }

  pub fn name(&self) -> Option<&str> { self.name.as_deref() }

  pub fn is_active(&self) -> bool { self.active }

  pub fn categories(&self) -> &[CategoryId] { &self.categories }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  pub fn deleted_at(&self) -> Option<DateTime<Utc>> { self.deleted_at }
}

// ─── Validator ───────────────────────────────────────────────────────────────

pub struct GenreValidator<'a> {
  genre:   &'a Genre,
  handler: &'a mut dyn ValidationHandler,
}

impl<'a> GenreValidator<'a> {
  pub fn new(genre: &'a Genre, handler: &'a mut dyn ValidationHandler) -> Self {
    Self { genre, handler }
  }
}

impl Validator for GenreValidator<'_> {
  fn validate(self) -> Result<()> {
    check_name(
      self.genre.name(),
      NAME_MIN_LENGTH..=NAME_MAX_LENGTH,
      "'name' must be between 1 and 255 characters",
      self.handler,
    )
  }
}
