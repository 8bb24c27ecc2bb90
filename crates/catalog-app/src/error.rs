//! Error type for `catalog-app`.

use catalog_core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Domain(#[from] catalog_core::Error),

  #[error("repository error: {0}")]
  Repository(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn repository(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Repository(Box::new(e))
  }

  /// The ordered validation errors carried by this failure, if any.
  pub fn errors(&self) -> Vec<ValidationError> {
    match self {
      Self::Domain(e) => e.errors(),
      Self::Repository(_) => Vec::new(),
    }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Domain(e) if e.is_not_found())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
