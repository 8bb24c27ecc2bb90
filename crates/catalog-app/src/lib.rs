//! Use cases for the catalog admin backend.
//!
//! Each use case composes aggregate validation, cross-aggregate reference
//! checks, and persistence for one business operation. Storage is reached
//! only through the repository traits in [`catalog_core::repository`].
//!
//! Every use case returns [`Result`]. Validation failures are reported as a
//! single [`catalog_core::Error::Notification`] carrying every error in
//! order; nothing is persisted when one is returned.

pub mod category;
pub mod error;
pub mod genre;
pub mod references;

pub use error::{Error, Result};
