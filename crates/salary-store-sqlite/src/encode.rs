//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microsecond
//! precision, `Z` suffix) so that lexical order matches chronological order.
//! Payment dates are stored as `YYYY-MM-DD`. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use salary_core::record::{PaymentStatus, SalaryRecord};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ────────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that builds a [`RawSalary`].
pub const SALARY_COLUMNS: &str = "salary_id, employee_id, employee_name, month, year,
   total_monthly_salary, advance_amount_paid, remaining_salary_payable,
   payment_date, payment_status, created_at, updated_at";

/// Raw values read directly from a `salaries` row.
pub struct RawSalary {
  pub salary_id:                String,
  pub employee_id:              String,
  pub employee_name:            String,
  pub month:                    u32,
  pub year:                     i32,
  pub total_monthly_salary:     f64,
  pub advance_amount_paid:      f64,
  pub remaining_salary_payable: f64,
  pub payment_date:             String,
  pub payment_status:           String,
  pub created_at:               String,
  pub updated_at:               String,
}

impl RawSalary {
  /// Read a row selected with [`SALARY_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      salary_id:                row.get(0)?,
      employee_id:              row.get(1)?,
      employee_name:            row.get(2)?,
      month:                    row.get(3)?,
      year:                     row.get(4)?,
      total_monthly_salary:     row.get(5)?,
      advance_amount_paid:      row.get(6)?,
      remaining_salary_payable: row.get(7)?,
      payment_date:             row.get(8)?,
      payment_status:           row.get(9)?,
      created_at:               row.get(10)?,
      updated_at:               row.get(11)?,
    })
  }

  pub fn into_record(self) -> Result<SalaryRecord> {
    Ok(SalaryRecord {
      id:                       decode_uuid(&self.salary_id)?,
      employee_id:              self.employee_id,
      employee_name:            self.employee_name,
      month:                    self.month,
      year:                     self.year,
      total_monthly_salary:     self.total_monthly_salary,
      advance_amount_paid:      self.advance_amount_paid,
      remaining_salary_payable: self.remaining_salary_payable,
      payment_date:             decode_date(&self.payment_date)?,
      payment_status:           self.payment_status.parse::<PaymentStatus>()?,
      created_at:               decode_dt(&self.created_at)?,
      updated_at:               decode_dt(&self.updated_at)?,
    })
  }
}
