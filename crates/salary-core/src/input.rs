//! Loosely-typed create input.
//!
//! Form submissions arrive with fields that may be absent, `null`, blank, or
//! numbers encoded as strings. [`SalaryInput`] accepts any JSON value per field
//! so that every such case is reported as a validation error rather than a
//! deserialisation failure.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result, record::NewSalaryRecord};

/// Raw body of a create request, one optional JSON value per field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
  pub employee_id:          Option<Value>,
  pub employee_name:        Option<Value>,
  pub month:                Option<Value>,
  pub year:                 Option<Value>,
  pub total_monthly_salary: Option<Value>,
  pub advance_amount_paid:  Option<Value>,
  pub payment_date:         Option<Value>,
}

impl SalaryInput {
  /// Names of required fields that are absent, `null`, or blank.
  ///
  /// A `month` or `year` of zero also counts as absent.
  pub fn missing_fields(&self) -> Vec<&'static str> {
    let checks: [(&'static str, &Option<Value>, bool); 7] = [
      ("employeeId", &self.employee_id, false),
      ("employeeName", &self.employee_name, false),
      ("month", &self.month, true),
      ("year", &self.year, true),
      ("totalMonthlySalary", &self.total_monthly_salary, false),
      ("advanceAmountPaid", &self.advance_amount_paid, false),
      ("paymentDate", &self.payment_date, false),
    ];

    checks
      .into_iter()
      .filter(|&(_, value, zero_is_missing)| !is_present(value.as_ref(), zero_is_missing))
      .map(|(name, ..)| name)
      .collect()
  }

  /// Validate every field and build a [`NewSalaryRecord`].
  ///
  /// Presence is checked before anything else, so a body with several
  /// problems reports the missing fields first.
  pub fn into_new_record(self) -> Result<NewSalaryRecord> {
    let missing = self.missing_fields();
    if !missing.is_empty() {
      return Err(Error::MissingFields { missing });
    }

    let record = NewSalaryRecord {
      employee_id:          text(self.employee_id.as_ref()),
      employee_name:        text(self.employee_name.as_ref()),
      month:                whole("month", self.month.as_ref())?
        .try_into()
        .map_err(|_| Error::OutOfRange {
          field:  "month",
          reason: "must be between 1 and 12",
        })?,
      year:                 whole("year", self.year.as_ref()).and_then(|n| {
        i32::try_from(n).map_err(|_| Error::OutOfRange {
          field:  "year",
          reason: if n < 0 { "must be 2000 or later" } else { TOO_LARGE },
        })
      })?,
      total_monthly_salary: number("totalMonthlySalary", self.total_monthly_salary.as_ref())?,
      advance_amount_paid:  number("advanceAmountPaid", self.advance_amount_paid.as_ref())?,
      payment_date:         date(self.payment_date.as_ref())?,
    };

    record.validate()?;
    Ok(record)
  }
}

// ─── Field helpers ───────────────────────────────────────────────────────────

fn is_present(value: Option<&Value>, zero_is_missing: bool) -> bool {
  match value {
    None | Some(Value::Null) => false,
    Some(Value::String(s)) => !s.trim().is_empty(),
    Some(Value::Number(n)) => !(zero_is_missing && n.as_f64() == Some(0.0)),
    Some(_) => true,
  }
}

/// Trimmed text; numeric identifiers are accepted and rendered as strings.
fn text(value: Option<&Value>) -> String {
  match value {
    Some(Value::String(s)) => s.trim().to_owned(),
    Some(Value::Null) | None => String::new(),
    Some(other) => other.to_string(),
  }
}

fn number(field: &'static str, value: Option<&Value>) -> Result<f64> {
  let parsed = match value {
    Some(Value::Number(n)) => n.as_f64(),
    Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
    _ => None,
  };
  parsed.ok_or(Error::OutOfRange { field, reason: "must be a number" })
}

const TOO_LARGE: &str = "must be a whole number in range";

fn whole(field: &'static str, value: Option<&Value>) -> Result<i64> {
  let n = number(field, value)?;
  if n.fract() != 0.0 || !n.is_finite() {
    return Err(Error::OutOfRange { field, reason: "must be a whole number" });
  }
  // `as` saturates; reject anything that would not round-trip.
  if n < i64::MIN as f64 || n >= i64::MAX as f64 {
    return Err(Error::OutOfRange { field, reason: TOO_LARGE });
  }
  Ok(n as i64)
}

/// Accept a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
fn date(value: Option<&Value>) -> Result<NaiveDate> {
  let raw = match value {
    Some(Value::String(s)) => s.trim(),
    Some(other) => return Err(Error::InvalidDate(other.to_string())),
    None => return Err(Error::InvalidDate(String::new())),
  };

  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
    .map_err(|_| Error::InvalidDate(raw.to_owned()))
}
