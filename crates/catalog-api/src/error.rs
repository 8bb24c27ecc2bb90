//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use catalog_core::validation::ValidationError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A command was rejected; carries every collected validation error.
  #[error("{message}")]
  Unprocessable {
    message: String,
    errors:  Vec<ValidationError>,
  },

  #[error("{0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<catalog_app::Error> for ApiError {
  fn from(e: catalog_app::Error) -> Self {
    match e {
      catalog_app::Error::Domain(e) if e.is_not_found() => ApiError::NotFound(e.to_string()),
      catalog_app::Error::Domain(e) => ApiError::Unprocessable {
        errors:  e.errors(),
        message: e.to_string(),
      },
      catalog_app::Error::Repository(e) => ApiError::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Unprocessable { message, errors } => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "message": message, "errors": errors })),
      )
        .into_response(),
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": m }))).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": e.to_string() })),
        )
          .into_response()
      }
    }
  }
}
