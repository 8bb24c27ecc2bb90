//! Error types for `catalog-core`.

use std::fmt::Display;

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// Raised by [`ThrowsValidationHandler`](crate::validation::ThrowsValidationHandler)
  /// as soon as anything is appended to it.
  #[error("{}", join_messages(.0))]
  Validation(Vec<ValidationError>),

  /// An accumulated [`Notification`](crate::validation::Notification) that
  /// was turned into a failure.
  #[error("{message}")]
  Notification {
    message: String,
    errors:  Vec<ValidationError>,
  },

  #[error("{entity} with id {id} was not found")]
  NotFound { entity: &'static str, id: String },
}

impl Error {
  pub fn not_found(entity: &'static str, id: impl Display) -> Self {
    Self::NotFound { entity, id: id.to_string() }
  }

  /// The ordered validation errors carried by this failure.
  ///
  /// A [`Error::NotFound`] has no validation errors of its own, so it yields
  /// a single error carrying its message.
  pub fn errors(&self) -> Vec<ValidationError> {
    match self {
      Self::Validation(errors) | Self::Notification { errors, .. } => {
        errors.clone()
      }
      Self::NotFound { .. } => vec![ValidationError::new(self.to_string())],
    }
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

fn join_messages(errors: &[ValidationError]) -> String {
  errors
    .iter()
    .map(ValidationError::message)
    .collect::<Vec<_>>()
    .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
