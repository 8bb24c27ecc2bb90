//! Core types and trait definitions for the media catalog admin backend.
//!
//! Aggregates, validation, and the repository traits. No HTTP or database
//! dependencies; every other crate in the workspace builds on this one.

pub mod category;
pub mod error;
pub mod genre;
pub mod id;
pub mod pagination;
pub mod repository;
pub mod validation;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
