//! [`GenreRepository`] for [`SqliteStore`].
//!
//! A genre spans two tables: the row in `genres` and its ordered category
//! references in `genre_categories`. Writes touch both inside one
//! transaction.

use catalog_core::{
  genre::{Genre, GenreId},
  pagination::{Pagination, SearchQuery},
  repository::GenreRepository,
};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{
    encode_direction, encode_dt, like_pattern, sort_column, RawGenre, GENRE_COLUMNS,
  },
  Error, Result, SqliteStore,
};

impl GenreRepository for SqliteStore {
  type Error = Error;

  async fn create(&self, genre: Genre) -> Result<Genre> {
    let row = GenreRow::from(&genre);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO genres
             (genre_id, name, active, created_at, updated_at, deleted_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.id, row.name, row.active, row.created_at, row.updated_at, row.deleted_at
          ],
        )?;
        write_categories(&tx, &row.id, &row.categories)?;
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(genre)
  }

  async fn update(&self, genre: Genre) -> Result<Genre> {
    let row = GenreRow::from(&genre);

    let changed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let changed = tx.execute(
          "UPDATE genres
              SET name = ?2, active = ?3, created_at = ?4, updated_at = ?5, deleted_at = ?6
            WHERE genre_id = ?1",
          rusqlite::params![
            row.id, row.name, row.active, row.created_at, row.updated_at, row.deleted_at
          ],
        )?;
        if changed > 0 {
          tx.execute(
            "DELETE FROM genre_categories WHERE genre_id = ?1",
            rusqlite::params![row.id],
          )?;
          write_categories(&tx, &row.id, &row.categories)?;
        }
        tx.commit()?;
        Ok(changed)
      })
      .await?;

    if changed == 0 {
      return Err(Error::GenreNotFound(genre.id().clone()));
    }
    Ok(genre)
  }

  async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>> {
    let id_str = id.into_inner();

    let raw: Option<RawGenre> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(
            &format!("SELECT {GENRE_COLUMNS} FROM genres WHERE genre_id = ?1"),
            rusqlite::params![id_str],
            RawGenre::from_row,
          )
          .optional()?;
        match raw {
          Some(mut raw) => {
            raw.categories = read_categories(conn, &raw.genre_id)?;
            Ok(Some(raw))
          }
          None => Ok(None),
        }
      })
      .await?;

    raw.map(RawGenre::into_genre).transpose()
  }

  async fn delete_by_id(&self, id: GenreId) -> Result<()> {
    let id_str = id.into_inner();

    // genre_categories rows go with it via ON DELETE CASCADE.
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM genres WHERE genre_id = ?1", rusqlite::params![id_str])?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn find_all<'a>(&'a self, query: &'a SearchQuery) -> Result<Pagination<Genre>> {
    let pattern  = like_pattern(&query.terms);
    let order_by = format!(
      "{} {}",
      sort_column(&query.sort),
      encode_direction(query.direction)
    );
    let limit  = i64::from(query.per_page);
    let offset = i64::from(query.page) * limit;

    let (total, raws): (i64, Vec<RawGenre>) = self
      .conn
      .call(move |conn| {
        let filter = "(?1 IS NULL OR name LIKE ?1 ESCAPE '\\')";

        let total: i64 = conn.query_row(
          &format!("SELECT COUNT(*) FROM genres WHERE {filter}"),
          rusqlite::params![pattern],
          |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
          "SELECT {GENRE_COLUMNS} FROM genres
            WHERE {filter}
            ORDER BY {order_by}, genre_id
            LIMIT ?2 OFFSET ?3"
        ))?;
        let mut rows = stmt
          .query_map(rusqlite::params![pattern, limit, offset], RawGenre::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        for raw in &mut rows {
          raw.categories = read_categories(conn, &raw.genre_id)?;
        }

        Ok((total, rows))
      })
      .await?;

    let items = raws
      .into_iter()
      .map(RawGenre::into_genre)
      .collect::<Result<_>>()?;

    Ok(Pagination {
      current_page: query.page,
      per_page:     query.per_page,
      total:        total.max(0) as u64,
      items,
    })
  }
}

// ─── Category references ─────────────────────────────────────────────────────

fn write_categories(
  conn:       &rusqlite::Connection,
  genre_id:   &str,
  categories: &[String],
) -> rusqlite::Result<()> {
  let mut stmt = conn.prepare(
    "INSERT INTO genre_categories (genre_id, position, category_id) VALUES (?1, ?2, ?3)",
  )?;
  for (position, category_id) in categories.iter().enumerate() {
    stmt.execute(rusqlite::params![genre_id, position as i64, category_id])?;
  }
  Ok(())
}

fn read_categories(
  conn:     &rusqlite::Connection,
  genre_id: &str,
) -> rusqlite::Result<Vec<String>> {
  let mut stmt = conn.prepare(
    "SELECT category_id FROM genre_categories WHERE genre_id = ?1 ORDER BY position",
  )?;
  stmt
    .query_map(rusqlite::params![genre_id], |row| row.get(0))?
    .collect()
}

// ─── Row encoding ────────────────────────────────────────────────────────────

struct GenreRow {
  id:         String,
  name:       Option<String>,
  active:     bool,
  created_at: String,
  updated_at: String,
  deleted_at: Option<String>,
  categories: Vec<String>,
}

impl From<&Genre> for GenreRow {
  fn from(g: &Genre) -> Self {
    Self {
      id:         g.id().as_str().to_owned(),
      name:       g.name().map(str::to_owned),
      active:     g.is_active(),
      created_at: encode_dt(g.created_at()),
      updated_at: encode_dt(g.updated_at()),
      deleted_at: g.deleted_at().map(encode_dt),
      categories: g.categories().iter().map(|c| c.as_str().to_owned()).collect(),
    }
  }
}
