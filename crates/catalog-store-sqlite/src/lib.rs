//! SQLite backend for the catalog repositories.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. [`SqliteStore`] implements both
//! [`CategoryRepository`](catalog_core::repository::CategoryRepository) and
//! [`GenreRepository`](catalog_core::repository::GenreRepository).

mod category;
mod encode;
mod genre;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
