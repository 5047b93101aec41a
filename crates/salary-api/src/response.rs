//! The `{"success": true, ...}` envelope wrapped around every successful
//! response body.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub message: &'static str,
  /// Only present on list responses that report a total.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub count:   Option<usize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:    Option<T>,
  #[serde(skip)]
  status:      StatusCode,
}

impl<T> Envelope<T> {
  pub fn ok(message: &'static str, data: T) -> Self {
    Self {
      success: true,
      message,
      count: None,
      data: Some(data),
      status: StatusCode::OK,
    }
  }

  pub fn created(message: &'static str, data: T) -> Self {
    Self { status: StatusCode::CREATED, ..Self::ok(message, data) }
  }

  pub fn with_count(mut self, count: usize) -> Self {
    self.count = Some(count);
    self
  }
}

impl Envelope<()> {
  /// A bare acknowledgement with no `data` field.
  pub fn message(message: &'static str) -> Self {
    Self {
      success: true,
      message,
      count: None,
      data: None,
      status: StatusCode::OK,
    }
  }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
  fn into_response(self) -> Response { (self.status, Json(self)).into_response() }
}
