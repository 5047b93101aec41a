//! Handlers for salary record endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/addSalary` | Body: [`SalaryInput`]; returns 201 + stored record |
//! | `GET`  | `/salary/{employee_id}` | 404 if the employee has no records |
//! | `GET`  | `/allSalaries` | Every record plus `count` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use salary_core::{input::SalaryInput, record::SalaryRecord, store::SalaryStore};

use crate::{error::ApiError, response::Envelope};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /addSalary`
///
/// Validation runs before the store is touched, so a rejected request writes
/// nothing.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<SalaryInput>, JsonRejection>,
) -> Result<Envelope<SalaryRecord>, ApiError>
where
  S: SalaryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = match body {
    Ok(Json(input)) => input,
    // Without a JSON content type the body is ignored, so every field is missing.
    Err(JsonRejection::MissingJsonContentType(rejection)) => {
      tracing::warn!(detail = %rejection.body_text(), "create body ignored");
      SalaryInput::default()
    }
    Err(rejection) => return Err(rejection.into()),
  };
  let new_record = input.into_new_record()?;

  let record = store
    .create(new_record)
    .await
    .map_err(ApiError::persistence)?;

  tracing::info!(
    salary_id = %record.id,
    employee_id = %record.employee_id,
    month = record.month,
    year = record.year,
    status = %record.payment_status,
    "salary record created"
  );
  Ok(Envelope::created("Salary record created successfully", record))
}

// ─── By employee ──────────────────────────────────────────────────────────────

/// `GET /salary/{employee_id}`
pub async fn by_employee<S>(
  State(store): State<Arc<S>>,
  Path(employee_id): Path<String>,
) -> Result<Envelope<Vec<SalaryRecord>>, ApiError>
where
  S: SalaryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .find_by_employee(employee_id.trim())
    .await
    .map_err(ApiError::persistence)?;

  if records.is_empty() {
    return Err(ApiError::NotFound(
      "No salary records found for this employee".to_owned(),
    ));
  }
  Ok(Envelope::ok("Salary records retrieved successfully", records))
}

// ─── All ──────────────────────────────────────────────────────────────────────

/// `GET /allSalaries`
pub async fn list_all<S>(
  State(store): State<Arc<S>>,
) -> Result<Envelope<Vec<SalaryRecord>>, ApiError>
where
  S: SalaryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store.find_all().await.map_err(ApiError::persistence)?;
  let count = records.len();
  Ok(Envelope::ok("All salary records retrieved successfully", records).with_count(count))
}
