//! Salary record types.
//!
//! A record covers one employee for one settlement period (month, year). It is
//! written once and never updated; the two derived fields are computed by the
//! store from the caller-supplied amounts.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Lowest accepted settlement year.
pub const MIN_YEAR: i32 = 2000;

// ─── PaymentStatus ───────────────────────────────────────────────────────────

/// Settlement state of a record, derived from the salary and advance amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
  /// Nothing has been paid yet.
  #[default]
  Pending,
  #[serde(rename = "Partially Paid")]
  PartiallyPaid,
  Paid,
}

impl PaymentStatus {
  /// The string stored in the database and emitted over JSON.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "Pending",
      Self::PartiallyPaid => "Partially Paid",
      Self::Paid => "Paid",
    }
  }
}

impl fmt::Display for PaymentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaymentStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Pending" => Ok(Self::Pending),
      "Partially Paid" => Ok(Self::PartiallyPaid),
      "Paid" => Ok(Self::Paid),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── NewSalaryRecord ─────────────────────────────────────────────────────────

/// Input to [`crate::store::SalaryStore::create`].
///
/// Carries only caller-supplied fields. The identifier, the timestamps and the
/// derived fields are always set by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSalaryRecord {
  pub employee_id:          String,
  pub employee_name:        String,
  pub month:                u32,
  pub year:                 i32,
  pub total_monthly_salary: f64,
  pub advance_amount_paid:  f64,
  pub payment_date:         NaiveDate,
}

impl NewSalaryRecord {
  /// Check every field-level invariant of a salary record.
  ///
  /// Identifiers must be non-blank, the period must be a real month no earlier
  /// than [`MIN_YEAR`], amounts must be finite and non-negative, and the
  /// advance may not exceed the total.
  pub fn validate(&self) -> Result<()> {
    if self.employee_id.trim().is_empty() {
      return Err(Error::MissingFields { missing: vec!["employeeId"] });
    }
    if self.employee_name.trim().is_empty() {
      return Err(Error::MissingFields { missing: vec!["employeeName"] });
    }
    if !(1..=12).contains(&self.month) {
      return Err(Error::OutOfRange {
        field:  "month",
        reason: "must be between 1 and 12",
      });
    }
    if self.year < MIN_YEAR {
      return Err(Error::OutOfRange {
        field:  "year",
        reason: "must be 2000 or later",
      });
    }
    check_amount("totalMonthlySalary", self.total_monthly_salary)?;
    check_amount("advanceAmountPaid", self.advance_amount_paid)?;

    if self.advance_amount_paid > self.total_monthly_salary {
      return Err(Error::AdvanceExceedsTotal {
        total:   self.total_monthly_salary,
        advance: self.advance_amount_paid,
      });
    }
    Ok(())
  }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
  if !value.is_finite() {
    return Err(Error::OutOfRange { field, reason: "must be a finite number" });
  }
  if value < 0.0 {
    return Err(Error::OutOfRange { field, reason: "must not be negative" });
  }
  Ok(())
}

// ─── SalaryRecord ────────────────────────────────────────────────────────────

/// A persisted salary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
  #[serde(rename = "_id")]
  pub id:                       Uuid,
  pub employee_id:              String,
  pub employee_name:            String,
  pub month:                    u32,
  pub year:                     i32,
  pub total_monthly_salary:     f64,
  pub advance_amount_paid:      f64,
  /// Always `total_monthly_salary - advance_amount_paid`.
  pub remaining_salary_payable: f64,
  pub payment_date:             NaiveDate,
  pub payment_status:           PaymentStatus,
  /// Server-assigned; never changes after creation.
  pub created_at:               DateTime<Utc>,
  pub updated_at:               DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> NewSalaryRecord {
    NewSalaryRecord {
      employee_id:          "EMP001".into(),
      employee_name:        "John Doe".into(),
      month:                1,
      year:                 2024,
      total_monthly_salary: 50_000.0,
      advance_amount_paid:  20_000.0,
      payment_date:         NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    }
  }

  #[test]
  fn valid_record_passes() { sample().validate().unwrap(); }

  #[test]
  fn advance_above_total_is_rejected() {
    let mut r = sample();
    r.advance_amount_paid = 60_000.0;
    assert!(matches!(r.validate(), Err(Error::AdvanceExceedsTotal { .. })));
  }

  #[test]
  fn month_outside_calendar_is_rejected() {
    for month in [0, 13] {
      let mut r = sample();
      r.month = month;
      assert!(matches!(
        r.validate(),
        Err(Error::OutOfRange { field: "month", .. })
      ));
    }
  }

  #[test]
  fn year_before_floor_is_rejected() {
    let mut r = sample();
    r.year = 1999;
    assert!(matches!(
      r.validate(),
      Err(Error::OutOfRange { field: "year", .. })
    ));
  }

  #[test]
  fn negative_or_nan_amounts_are_rejected() {
    let mut r = sample();
    r.advance_amount_paid = -1.0;
    assert!(r.validate().is_err());

    let mut r = sample();
    r.total_monthly_salary = f64::NAN;
    assert!(r.validate().is_err());
  }

  #[test]
  fn blank_name_counts_as_missing() {
    let mut r = sample();
    r.employee_name = "   ".into();
    assert!(matches!(r.validate(), Err(Error::MissingFields { .. })));
  }

  #[test]
  fn status_strings_match_wire_format() {
    assert_eq!(
      serde_json::to_value(PaymentStatus::PartiallyPaid).unwrap(),
      serde_json::json!("Partially Paid")
    );
    assert_eq!(
      "Partially Paid".parse::<PaymentStatus>().unwrap(),
      PaymentStatus::PartiallyPaid
    );
    assert!("partial".parse::<PaymentStatus>().is_err());
  }
}
