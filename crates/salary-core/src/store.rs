//! The `SalaryStore` trait.
//!
//! Implemented by storage backends (e.g. `salary-store-sqlite`). The API layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::{NewSalaryRecord, SalaryRecord};

/// Abstraction over a salary record backend.
///
/// Records are append-only: there is no update or delete. No uniqueness is
/// enforced over `(employee_id, month, year)`, so the same period may be
/// recorded more than once.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SalaryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record and return it as stored.
  ///
  /// The store computes `remaining_salary_payable` and `payment_status` with
  /// [`crate::derive::derive_state`], assigns a fresh identifier, and sets
  /// `created_at` and `updated_at` to the write time.
  fn create(
    &self,
    input: NewSalaryRecord,
  ) -> impl Future<Output = Result<SalaryRecord, Self::Error>> + Send + '_;

  /// All records for `employee_id`, newest period first (year, then month,
  /// then creation time, all descending). Empty if there are none.
  fn find_by_employee<'a>(
    &'a self,
    employee_id: &'a str,
  ) -> impl Future<Output = Result<Vec<SalaryRecord>, Self::Error>> + Send + 'a;

  /// Every record, ordered by year, month, then creation time, all descending.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<SalaryRecord>, Self::Error>> + Send + '_;
}
