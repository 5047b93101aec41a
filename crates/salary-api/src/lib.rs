//! JSON REST API for the salary tracker.
//!
//! Exposes an axum [`Router`] backed by any [`salary_core::store::SalaryStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .route("/health", get(salary_api::health))
//!   .nest("/api", salary_api::api_router(store.clone()))
//!   .fallback(salary_api::endpoint_not_found)
//! ```

pub mod error;
pub mod response;
pub mod salaries;

use std::sync::Arc;

use axum::{
  Router,
  http::StatusCode,
  response::IntoResponse,
  routing::{get, post},
};
use salary_core::store::SalaryStore;
use serde_json::json;

pub use error::ApiError;
pub use response::Envelope;

/// Build the salary API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Unmatched paths fall through to the parent's
/// fallback.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SalaryStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/addSalary", post(salaries::create::<S>))
    .route("/salary/{employee_id}", get(salaries::by_employee::<S>))
    .route("/allSalaries", get(salaries::list_all::<S>))
    .with_state(store)
}

/// `GET /health`
pub async fn health() -> Envelope<()> { Envelope::message("Server is running") }

/// Fallback for any route no other handler matched.
pub async fn endpoint_not_found() -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    axum::Json(json!({ "success": false, "message": "Endpoint not found" })),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
