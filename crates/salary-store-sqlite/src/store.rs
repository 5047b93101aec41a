//! [`SqliteStore`] — the SQLite implementation of [`SalaryStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use salary_core::{
  derive::derive_state,
  record::{NewSalaryRecord, SalaryRecord},
  store::SalaryStore,
};
use uuid::Uuid;

use crate::{
  encode::{encode_date, encode_dt, encode_uuid, RawSalary, SALARY_COLUMNS},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A salary record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, flushing any pending work.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a fully-built [`SalaryRecord`] into the `salaries` table.
  async fn insert_record(&self, record: &SalaryRecord) -> Result<()> {
    let id_str           = encode_uuid(record.id);
    let employee_id      = record.employee_id.clone();
    let employee_name    = record.employee_name.clone();
    let month            = record.month;
    let year             = record.year;
    let total            = record.total_monthly_salary;
    let advance          = record.advance_amount_paid;
    let remaining        = record.remaining_salary_payable;
    let payment_date_str = encode_date(record.payment_date);
    let status_str       = record.payment_status.as_str();
    let created_at_str   = encode_dt(record.created_at);
    let updated_at_str   = encode_dt(record.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO salaries (
             salary_id, employee_id, employee_name, month, year,
             total_monthly_salary, advance_amount_paid, remaining_salary_payable,
             payment_date, payment_status, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
          rusqlite::params![
            id_str,
            employee_id,
            employee_name,
            month,
            year,
            total,
            advance,
            remaining,
            payment_date_str,
            status_str,
            created_at_str,
            updated_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SalaryStore impl ────────────────────────────────────────────────────────

impl SalaryStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, input: NewSalaryRecord) -> Result<SalaryRecord> {
    let state = derive_state(input.total_monthly_salary, input.advance_amount_paid);
    // Microseconds, matching what `encode_dt` persists.
    let now   = Utc::now().trunc_subsecs(6);

    let record = SalaryRecord {
      id:                       Uuid::new_v4(),
      employee_id:              input.employee_id,
      employee_name:            input.employee_name,
      month:                    input.month,
      year:                     input.year,
      total_monthly_salary:     input.total_monthly_salary,
      advance_amount_paid:      input.advance_amount_paid,
      remaining_salary_payable: state.remaining_salary_payable,
      payment_date:             input.payment_date,
      payment_status:           state.payment_status,
      created_at:               now,
      updated_at:               now,
    };

    self.insert_record(&record).await?;
    tracing::debug!(
      salary_id = %record.id,
      employee_id = %record.employee_id,
      status = %record.payment_status,
      "salary record stored"
    );
    Ok(record)
  }

  async fn find_by_employee(&self, employee_id: &str) -> Result<Vec<SalaryRecord>> {
    let employee_id = employee_id.to_owned();

    let raws: Vec<RawSalary> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SALARY_COLUMNS}
           FROM salaries
           WHERE employee_id = ?1
           ORDER BY year DESC, month DESC, created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![employee_id], RawSalary::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSalary::into_record).collect()
  }

  async fn find_all(&self) -> Result<Vec<SalaryRecord>> {
    let raws: Vec<RawSalary> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SALARY_COLUMNS}
           FROM salaries
           ORDER BY year DESC, month DESC, created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], RawSalary::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSalary::into_record).collect()
  }
}
