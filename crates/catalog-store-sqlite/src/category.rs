//! [`CategoryRepository`] for [`SqliteStore`].

use catalog_core::{
  category::{Category, CategoryId},
  pagination::{CategorySearchQuery, Pagination},
  repository::CategoryRepository,
};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{
    encode_direction, encode_dt, like_pattern, sort_column, RawCategory,
    CATEGORY_COLUMNS,
  },
  Error, Result, SqliteStore,
};

impl CategoryRepository for SqliteStore {
  type Error = Error;

  async fn create(&self, category: Category) -> Result<Category> {
    let row = CategoryRow::from(&category);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO categories
             (category_id, name, description, active, created_at, updated_at, deleted_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            row.id, row.name, row.description, row.active,
            row.created_at, row.updated_at, row.deleted_at
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(category)
  }

  async fn update(&self, category: Category) -> Result<Category> {
    let row = CategoryRow::from(&category);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE categories
              SET name = ?2, description = ?3, active = ?4,
                  created_at = ?5, updated_at = ?6, deleted_at = ?7
            WHERE category_id = ?1",
          rusqlite::params![
            row.id, row.name, row.description, row.active,
            row.created_at, row.updated_at, row.deleted_at
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::CategoryNotFound(category.id().clone()));
    }
    Ok(category)
  }

  async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>> {
    let id_str = id.into_inner();

    let raw: Option<RawCategory> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = ?1"),
            rusqlite::params![id_str],
            RawCategory::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawCategory::into_category).transpose()
  }

  async fn exists_by_ids(&self, ids: Vec<CategoryId>) -> Result<Vec<CategoryId>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }

    let ids: Vec<String> = ids.into_iter().map(CategoryId::into_inner).collect();

    let found: Vec<String> = self
      .conn
      .call(move |conn| {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let mut stmt = conn.prepare(&format!(
          "SELECT category_id FROM categories WHERE category_id IN ({placeholders})"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(ids.iter()), |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(found.into_iter().map(CategoryId::from).collect())
  }

  async fn delete_by_id(&self, id: CategoryId) -> Result<()> {
    let id_str = id.into_inner();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM categories WHERE category_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn find_all<'a>(
    &'a self,
    query: &'a CategorySearchQuery,
  ) -> Result<Pagination<Category>> {
    let pattern  = like_pattern(&query.terms);
    let order_by = format!(
      "{} {}",
      sort_column(&query.sort),
      encode_direction(query.direction)
    );
    let limit  = i64::from(query.per_page);
    let offset = i64::from(query.page) * limit;

    let (total, raws): (i64, Vec<RawCategory>) = self
      .conn
      .call(move |conn| {
        let filter =
          "(?1 IS NULL OR name LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\')";

        let total: i64 = conn.query_row(
          &format!("SELECT COUNT(*) FROM categories WHERE {filter}"),
          rusqlite::params![pattern],
          |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
          "SELECT {CATEGORY_COLUMNS} FROM categories
            WHERE {filter}
            ORDER BY {order_by}, category_id
            LIMIT ?2 OFFSET ?3"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![pattern, limit, offset], RawCategory::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((total, rows))
      })
      .await?;

    let items = raws
      .into_iter()
      .map(RawCategory::into_category)
      .collect::<Result<_>>()?;

    Ok(Pagination {
      current_page: query.page,
      per_page:     query.per_page,
      total:        total.max(0) as u64,
      items,
    })
  }
}

// ─── Row encoding ────────────────────────────────────────────────────────────

struct CategoryRow {
  id:          String,
  name:        Option<String>,
  description: Option<String>,
  active:      bool,
  created_at:  String,
  updated_at:  String,
  deleted_at:  Option<String>,
}

impl From<&Category> for CategoryRow {
  fn from(c: &Category) -> Self {
    Self {
      id:          c.id().as_str().to_owned(),
      name:        c.name().map(str::to_owned),
      description: c.description().map(str::to_owned),
      active:      c.is_active(),
      created_at:  encode_dt(c.created_at()),
      updated_at:  encode_dt(c.updated_at()),
      deleted_at:  c.deleted_at().map(encode_dt),
    }
  }
}
