//! Opaque string identifiers for the catalog aggregates.
//!
//! Fresh identifiers are lowercase hyphenated UUID v4 strings, but any caller
//! string is accepted when referring to an existing aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a [`Category`](crate::category::Category).
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(String);

/// Identifier of a [`Genre`](crate::genre::Genre).
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GenreId(String);

macro_rules! impl_string_id {
  ($t:ty) => {
    impl $t {
      /// Generate a new, never-before-seen identifier.
      pub fn unique() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
      }

      pub fn as_str(&self) -> &str { &self.0 }

      pub fn into_inner(self) -> String { self.0 }
    }

    impl fmt::Display for $t {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<String> for $t {
      fn from(value: String) -> Self { Self(value) }
    }

    impl From<&str> for $t {
      fn from(value: &str) -> Self { Self(value.to_owned()) }
    }

    impl AsRef<str> for $t {
      fn as_ref(&self) -> &str { &self.0 }
    }
  };
}

impl_string_id!(CategoryId);
impl_string_id!(GenreId);
