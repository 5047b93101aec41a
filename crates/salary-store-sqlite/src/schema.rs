//! SQL schema for the salary SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Records are append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS salaries (
    salary_id                TEXT PRIMARY KEY,
    employee_id              TEXT NOT NULL CHECK (length(employee_id) > 0),
    employee_name            TEXT NOT NULL CHECK (length(employee_name) > 0),
    month                    INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
    year                     INTEGER NOT NULL CHECK (year >= 2000),
    total_monthly_salary     REAL NOT NULL CHECK (total_monthly_salary >= 0),
    advance_amount_paid      REAL NOT NULL CHECK (advance_amount_paid >= 0),
    remaining_salary_payable REAL NOT NULL CHECK (remaining_salary_payable >= 0),
    payment_date             TEXT NOT NULL,   -- YYYY-MM-DD
    payment_status           TEXT NOT NULL
        CHECK (payment_status IN ('Pending', 'Partially Paid', 'Paid')),
    created_at               TEXT NOT NULL,   -- RFC 3339 UTC, fixed width
    updated_at               TEXT NOT NULL,
    CHECK (advance_amount_paid <= total_monthly_salary),
    CHECK (remaining_salary_payable = total_monthly_salary - advance_amount_paid)
);

-- No uniqueness over (employee_id, month, year).
CREATE INDEX IF NOT EXISTS salaries_employee_idx
    ON salaries(employee_id, year DESC, month DESC);
CREATE INDEX IF NOT EXISTS salaries_period_idx
    ON salaries(year DESC, month DESC, created_at DESC);

PRAGMA user_version = 1;
";
