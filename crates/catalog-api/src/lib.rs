//! JSON REST API for the catalog.
//!
//! Exposes an axum [`Router`] backed by any store implementing both
//! [`CategoryRepository`] and [`GenreRepository`].
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", catalog_api::api_router(store.clone()))
//! ```

pub mod categories;
pub mod error;
pub mod genres;
pub mod search;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use catalog_core::repository::{CategoryRepository, GenreRepository};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CATALOG_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CategoryRepository + GenreRepository + 'static,
{
  Router::new()
    // Categories
    .route(
      "/categories",
      get(categories::list::<S>).post(categories::create::<S>),
    )
    .route(
      "/categories/{id}",
      get(categories::get_one::<S>)
        .put(categories::update::<S>)
        .delete(categories::delete::<S>),
    )
    // Genres
    .route("/genres", get(genres::list::<S>).post(genres::create::<S>))
    .route(
      "/genres/{id}",
      get(genres::get_one::<S>)
        .put(genres::update::<S>)
        .delete(genres::delete::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

#[cfg(test)]
mod tests;
