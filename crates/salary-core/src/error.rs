//! Error types for `salary-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more required fields were absent, null, or blank.
  #[error(
    "All fields are required: employeeId, employeeName, month, year, \
     totalMonthlySalary, advanceAmountPaid, paymentDate"
  )]
  MissingFields { missing: Vec<&'static str> },

  #[error("Advance amount cannot exceed total monthly salary")]
  AdvanceExceedsTotal { total: f64, advance: f64 },

  #[error("{field} {reason}")]
  OutOfRange {
    field:  &'static str,
    reason: &'static str,
  },

  #[error("paymentDate is not a valid date: {0:?}")]
  InvalidDate(String),

  #[error("unknown payment status: {0:?}")]
  UnknownStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
