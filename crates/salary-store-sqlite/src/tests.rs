//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use salary_core::{
  record::{NewSalaryRecord, PaymentStatus},
  store::SalaryStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn salary(employee_id: &str, month: u32, year: i32, total: f64, advance: f64) -> NewSalaryRecord {
  NewSalaryRecord {
    employee_id:          employee_id.into(),
    employee_name:        format!("Employee {employee_id}"),
    month,
    year,
    total_monthly_salary: total,
    advance_amount_paid:  advance,
    payment_date:         NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
  }
}

fn periods(records: &[salary_core::record::SalaryRecord]) -> Vec<(i32, u32)> {
  records.iter().map(|r| (r.year, r.month)).collect()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_derives_state_and_assigns_metadata() {
  let s = store().await;

  let mut input = salary("EMP001", 1, 2024, 50_000.0, 20_000.0);
  input.employee_name = "John Doe".into();
  let record = s.create(input).await.unwrap();

  assert_eq!(record.employee_id, "EMP001");
  assert_eq!(record.employee_name, "John Doe");
  assert_eq!(record.remaining_salary_payable, 30_000.0);
  assert_eq!(record.payment_status, PaymentStatus::PartiallyPaid);
  assert_eq!(record.payment_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
  assert_eq!(record.created_at, record.updated_at);
}

#[tokio::test]
async fn created_record_reads_back_identically() {
  let s = store().await;
  let created = s.create(salary("EMP001", 3, 2024, 1_250.75, 0.0)).await.unwrap();

  let fetched = s.find_by_employee("EMP001").await.unwrap();
  assert_eq!(fetched.len(), 1);

  let stored = &fetched[0];
  assert_eq!(stored, &created);
  assert_eq!(stored.payment_status, PaymentStatus::Pending);
  assert_eq!(stored.remaining_salary_payable, 1_250.75);
  assert_eq!(stored.created_at, stored.updated_at);
  assert_eq!(stored.created_at.timestamp_subsec_nanos() % 1_000, 0);
}

#[tokio::test]
async fn full_advance_is_paid() {
  let s = store().await;
  let record = s.create(salary("EMP002", 6, 2023, 4_000.0, 4_000.0)).await.unwrap();
  assert_eq!(record.payment_status, PaymentStatus::Paid);
  assert_eq!(record.remaining_salary_payable, 0.0);
}

#[tokio::test]
async fn duplicate_periods_are_both_kept() {
  let s = store().await;
  let a = s.create(salary("EMP001", 1, 2024, 100.0, 10.0)).await.unwrap();
  let b = s.create(salary("EMP001", 1, 2024, 100.0, 10.0)).await.unwrap();
  assert_ne!(a.id, b.id);

  let all = s.find_by_employee("EMP001").await.unwrap();
  assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn schema_rejects_advance_above_total() {
  let s = store().await;
  let err = s
    .create(salary("EMP001", 1, 2024, 50_000.0, 60_000.0))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Database(_)), "got {err:?}");
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn schema_rejects_out_of_range_period() {
  let s = store().await;
  let mut input = salary("EMP001", 1, 2024, 100.0, 0.0);
  input.month = 13;
  assert!(s.create(input).await.is_err());

  let mut input = salary("EMP001", 1, 2024, 100.0, 0.0);
  input.year = 1999;
  assert!(s.create(input).await.is_err());
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_employee_unknown_is_empty() {
  let s = store().await;
  s.create(salary("EMP001", 1, 2024, 100.0, 0.0)).await.unwrap();
  assert!(s.find_by_employee("EMP999").await.unwrap().is_empty());
}

#[tokio::test]
async fn find_by_employee_filters_and_orders_newest_period_first() {
  let s = store().await;
  s.create(salary("EMP001", 11, 2023, 100.0, 0.0)).await.unwrap();
  s.create(salary("EMP001", 2, 2024, 100.0, 0.0)).await.unwrap();
  s.create(salary("EMP002", 5, 2024, 100.0, 0.0)).await.unwrap();
  s.create(salary("EMP001", 12, 2023, 100.0, 0.0)).await.unwrap();
  s.create(salary("EMP001", 1, 2024, 100.0, 0.0)).await.unwrap();

  let records = s.find_by_employee("EMP001").await.unwrap();
  assert!(records.iter().all(|r| r.employee_id == "EMP001"));
  assert_eq!(periods(&records), [(2024, 2), (2024, 1), (2023, 12), (2023, 11)]);
}

#[tokio::test]
async fn find_all_orders_by_year_regardless_of_insert_order() {
  for years in [[2023, 2024], [2024, 2023]] {
    let s = store().await;
    for year in years {
      s.create(salary("EMP001", 1, year, 100.0, 0.0)).await.unwrap();
    }
    let all = s.find_all().await.unwrap();
    assert_eq!(periods(&all), [(2024, 1), (2023, 1)]);
  }
}

#[tokio::test]
async fn find_all_breaks_period_ties_by_newest_creation() {
  let s = store().await;
  let first = s.create(salary("EMP001", 4, 2024, 100.0, 0.0)).await.unwrap();
  let second = s.create(salary("EMP002", 4, 2024, 100.0, 0.0)).await.unwrap();
  s.create(salary("EMP003", 3, 2024, 100.0, 0.0)).await.unwrap();

  let all = s.find_all().await.unwrap();
  assert_eq!(all.len(), 3);
  assert_eq!(all[0].id, second.id);
  assert_eq!(all[1].id, first.id);
  assert_eq!(all[2].employee_id, "EMP003");
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
  let s = store().await;
  assert!(s.find_all().await.unwrap().is_empty());
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn file_store_survives_close_and_reopen() {
  let path = std::env::temp_dir().join(format!("salary-{}.db", uuid::Uuid::new_v4()));

  let s = SqliteStore::open(&path).await.unwrap();
  let created = s.create(salary("EMP001", 1, 2024, 100.0, 50.0)).await.unwrap();
  s.close().await.unwrap();

  let s = SqliteStore::open(&path).await.unwrap();
  let all = s.find_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, created.id);
  s.close().await.unwrap();

  for suffix in ["", "-wal", "-shm"] {
    let mut p = path.clone().into_os_string();
    p.push(suffix);
    let _ = std::fs::remove_file(p);
  }
}
