//! Validation primitives shared by every aggregate.
//!
//! A [`Validator`] runs its checks against a [`ValidationHandler`], and the
//! handler decides what a failed check means: [`Notification`] collects every
//! error, [`ThrowsValidationHandler`] fails on the first one. The same
//! validator call site works with either.

mod notification;
mod throws;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use notification::Notification;
pub use throws::ThrowsValidationHandler;

use crate::Result;

// ─── Error value ─────────────────────────────────────────────────────────────

/// A single violated invariant. Two errors are equal when their messages are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
  message: String,
}

impl ValidationError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  pub fn message(&self) -> &str { &self.message }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

// ─── Handler ─────────────────────────────────────────────────────────────────

/// Strategy for collecting the outcome of validation checks.
pub trait ValidationHandler {
  /// Record `error`, or fail with it.
  fn append(&mut self, error: ValidationError) -> Result<()>;

  /// Merge every error accumulated by `other`, preserving its order.
  fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<()>;

  /// Run `operation`. A failure is converted into validation errors and
  /// delivered through this handler; `Ok(None)` means the handler absorbed
  /// the failure.
  fn validate<T, F>(&mut self, operation: F) -> Result<Option<T>>
  where
    F: FnOnce() -> Result<T>,
    Self: Sized;

  /// Every error recorded so far, in insertion order.
  fn errors(&self) -> &[ValidationError];

  fn has_error(&self) -> bool { !self.errors().is_empty() }

  fn first_error(&self) -> Option<&ValidationError> { self.errors().first() }
}

// ─── Validator ───────────────────────────────────────────────────────────────

/// A set of checks bound to one aggregate instance and one handler.
///
/// Implementations only read from the aggregate and report through the
/// handler. A validator stops at its first failing check, so one run
/// produces at most one error.
pub trait Validator {
  fn validate(self) -> Result<()>;
}

/// Check a name against the null / blank / length rules shared by the
/// aggregates, stopping at the first violation.
pub(crate) fn check_name(
  name: Option<&str>,
  bounds: std::ops::RangeInclusive<usize>,
  length_message: &str,
  handler: &mut dyn ValidationHandler,
) -> Result<()> {
  let Some(name) = name else {
    return handler.append(ValidationError::new("'name' must not be null"));
  };
  if name.trim().is_empty() {
    return handler.append(ValidationError::new("'name' must not be empty"));
  }
  let length = name.trim().chars().count();
  if !bounds.contains(&length) {
    return handler.append(ValidationError::new(length_message));
  }
  Ok(())
}
