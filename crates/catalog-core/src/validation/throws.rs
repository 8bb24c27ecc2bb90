//! [`ThrowsValidationHandler`]: the fail-fast handler.

use super::{ValidationError, ValidationHandler};
use crate::{Error, Result};

/// Holds no state: the first thing appended to it becomes an
/// [`Error::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
  fn append(&mut self, error: ValidationError) -> Result<()> {
    Err(Error::Validation(vec![error]))
  }

  fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<()> {
    Err(Error::Validation(other.errors().to_vec()))
  }

  fn validate<T, F>(&mut self, operation: F) -> Result<Option<T>>
  where
    F: FnOnce() -> Result<T>,
  {
    operation()
      .map(Some)
      .map_err(|failure| {
        Error::Validation(vec![ValidationError::new(failure.to_string())])
      })
  }

  fn errors(&self) -> &[ValidationError] { &[] }
}
