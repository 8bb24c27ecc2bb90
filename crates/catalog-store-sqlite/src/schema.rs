//! SQL schema for the catalog SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS categories (
    category_id  TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    description  TEXT,
    active       INTEGER NOT NULL,
    created_at   TEXT NOT NULL,   -- RFC 3339 UTC, fixed nanosecond width
    updated_at   TEXT NOT NULL,
    deleted_at   TEXT             -- set while inactive
);

CREATE TABLE IF NOT EXISTS genres (
    genre_id     TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    active       INTEGER NOT NULL,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL,
    deleted_at   TEXT
);

-- Ordered category references of a genre. Duplicates are allowed, so the
-- key is the position rather than the category id. category_id is a weak
-- reference: deleting a category leaves these rows alone.
CREATE TABLE IF NOT EXISTS genre_categories (
    genre_id     TEXT NOT NULL REFERENCES genres(genre_id) ON DELETE CASCADE,
    position     INTEGER NOT NULL,
    category_id  TEXT NOT NULL,
    PRIMARY KEY (genre_id, position)
);

CREATE INDEX IF NOT EXISTS categories_name_idx ON categories(name);
CREATE INDEX IF NOT EXISTS genres_name_idx     ON genres(name);

PRAGMA user_version = 1;
";
