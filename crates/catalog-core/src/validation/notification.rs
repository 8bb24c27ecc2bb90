//! [`Notification`]: the accumulating handler.

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationHandler};
use crate::{Error, Result};

/// Collects every error appended to it, in order, duplicates included.
/// Appending never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
  errors: Vec<ValidationError>,
}

impl Notification {
  pub fn create() -> Self { Self::default() }

  /// A notification holding a single error built from a failure's message.
  pub fn from_failure(failure: &dyn std::error::Error) -> Self {
    Self { errors: vec![ValidationError::new(failure.to_string())] }
  }

  pub fn into_errors(self) -> Vec<ValidationError> { self.errors }

  /// Turn the accumulated errors into a failure carrying all of them.
  pub fn into_error(self, message: impl Into<String>) -> Error {
    Error::Notification { message: message.into(), errors: self.errors }
  }

  /// `Err` with every accumulated error if there are any, `Ok` otherwise.
  pub fn into_result(self, message: impl Into<String>) -> Result<()> {
    if self.has_error() {
      Err(self.into_error(message))
    } else {
      Ok(())
    }
  }
}

impl From<ValidationError> for Notification {
  fn from(error: ValidationError) -> Self { Self { errors: vec![error] } }
}

impl ValidationHandler for Notification {
  fn append(&mut self, error: ValidationError) -> Result<()> {
    self.errors.push(error);
    Ok(())
  }

  fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<()> {
    self.errors.extend_from_slice(other.errors());
    Ok(())
  }

  fn validate<T, F>(&mut self, operation: F) -> Result<Option<T>>
  where
    F: FnOnce() -> Result<T>,
  {
    match operation() {
      Ok(value) => Ok(Some(value)),
      Err(failure) => {
        self.errors.extend(failure.errors());
        Ok(None)
      }
    }
  }

  fn errors(&self) -> &[ValidationError] { &self.errors }
}
