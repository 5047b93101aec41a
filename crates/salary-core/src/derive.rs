//! The salary-state derivation rule.
//!
//! `remaining_salary_payable` and `payment_status` are never accepted from
//! callers; they are computed here from the total and the advance.

use serde::{Deserialize, Serialize};

use crate::record::PaymentStatus;

/// The derived half of a salary record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryState {
  pub remaining_salary_payable: f64,
  pub payment_status:           PaymentStatus,
}

/// Derive the remaining payable amount and the payment status.
///
/// Defined for `total >= 0` and `0 <= advance <= total`. The zero-advance
/// check runs first, so a zero salary with a zero advance is `Pending`.
pub fn derive_state(total: f64, advance: f64) -> SalaryState {
  let payment_status = if advance == 0.0 {
    PaymentStatus::Pending
  } else if advance == total {
    PaymentStatus::Paid
  } else {
    PaymentStatus::PartiallyPaid
  };

  SalaryState {
    remaining_salary_payable: total - advance,
    payment_status,
  }
}
