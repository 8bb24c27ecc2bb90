//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings with a fixed nanosecond
//! width, so text order matches time order.

use catalog_core::{
  category::{Category, CategoryId},
  genre::{Genre, GenreId},
  pagination::Direction,
};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

fn decode_opt_dt(s: Option<String>) -> Result<Option<DateTime<Utc>>> {
  s.as_deref().map(decode_dt).transpose()
}

// ─── Search ──────────────────────────────────────────────────────────────────

/// Map a requested sort field onto a column; unknown fields sort by name.
pub fn sort_column(sort: &str) -> &'static str {
  match sort {
    "createdAt" | "created_at" => "created_at",
    "updatedAt" | "updated_at" => "updated_at",
    _ => "name",
  }
}

pub fn encode_direction(d: Direction) -> &'static str {
  match d {
    Direction::Asc => "ASC",
    Direction::Desc => "DESC",
  }
}

/// `LIKE` pattern for free-text terms, or `None` when blank.
///
/// `%`, `_` and `\` in the terms match literally; queries must declare
/// `ESCAPE '\'`.
pub fn like_pattern(terms: &str) -> Option<String> {
  let terms = terms.trim();
  if terms.is_empty() {
    return None;
  }
  let mut pattern = String::with_capacity(terms.len() + 2);
  pattern.push('%');
  for c in terms.chars() {
    if matches!(c, '%' | '_' | '\\') {
      pattern.push('\\');
    }
    pattern.push(c);
  }
  pattern.push('%');
  Some(pattern)
}

// ─── Raw row types ───────────────────────────────────────────────────────────

pub const CATEGORY_COLUMNS: &str =
  "category_id, name, description, active, created_at, updated_at, deleted_at";

/// A category row as read from SQLite, before decoding.
pub struct RawCategory {
  pub category_id: String,
  pub name:        String,
  pub description: Option<String>,
  pub active:      bool,
  pub created_at:  String,
  pub updated_at:  String,
  pub deleted_at:  Option<String>,
}

impl RawCategory {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      category_id: row.get(0)?,
      name:        row.get(1)?,
      description: row.get(2)?,
      active:      row.get(3)?,
      created_at:  row.get(4)?,
      updated_at:  row.get(5)?,
      deleted_at:  row.get(6)?,
    })
  }

  pub fn into_category(self) -> Result<Category> {
    Ok(Category::with(
      CategoryId::from(self.category_id),
      Some(self.name),
      self.description,
      self.active,
      decode_dt(&self.created_at)?,
      decode_dt(&self.updated_at)?,
      decode_opt_dt(self.deleted_at)?,
    ))
  }
}

pub const GENRE_COLUMNS: &str =
  "genre_id, name, active, created_at, updated_at, deleted_at";

/// A genre row plus its ordered category ids, before decoding.
pub struct RawGenre {
  pub genre_id:   String,
  pub name:       String,
  pub active:     bool,
  pub created_at: String,
  pub updated_at: String,
  pub deleted_at: Option<String>,
  pub categories: Vec<String>,
}

impl RawGenre {
  /// Reads the genre columns; `categories` is filled in separately.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      genre_id:   row.get(0)?,
      name:       row.get(1)?,
      active:     row.get(2)?,
      created_at: row.get(3)?,
      updated_at: row.get(4)?,
      deleted_at: row.get(5)?,
      categories: Vec::new(),
    })
  }

  pub fn into_genre(self) -> Result<Genre> {
    Ok(Genre::with(
      GenreId::from(self.genre_id),
      Some(self.name),
      self.active,
      self.categories.into_iter().map(CategoryId::from).collect(),
      decode_dt(&self.created_at)?,
      decode_dt(&self.updated_at)?,
      decode_opt_dt(self.deleted_at)?,
    )?)
  }
}
