//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is answered with `{"success": false, "message": ...}`; server
//! faults also carry the underlying cause under `"error"`.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message shown to clients for any persistence failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Missing field, out-of-range value, or advance exceeding the total.
  #[error("{0}")]
  Validation(#[from] salary_core::Error),

  #[error("invalid JSON body: {0}")]
  BadJson(String),

  #[error("{0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn persistence<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Persistence(Box::new(e))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation(_) | Self::BadJson(_) => StatusCode::BAD_REQUEST,
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { Self::BadJson(rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = match &self {
      ApiError::Validation(e) => {
        tracing::warn!(error = %e, "rejected salary input");
        json!({ "success": false, "message": e.to_string() })
      }
      ApiError::BadJson(detail) => {
        tracing::warn!(%detail, "unparseable request body");
        json!({ "success": false, "message": "Invalid JSON body", "error": detail })
      }
      ApiError::NotFound(m) => json!({ "success": false, "message": m }),
      ApiError::Persistence(e) => {
        tracing::error!(error = %e, "salary store failure");
        json!({
          "success": false,
          "message": SERVER_ERROR_MESSAGE,
          "error": e.to_string(),
        })
      }
    };
    (status, Json(body)).into_response()
  }
}
