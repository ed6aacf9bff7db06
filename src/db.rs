use std::time::Duration;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::config::Config;

/// Builds the pool without opening a connection, so the API can start while
/// the database is down and report 503s until it comes back.
pub fn init_db(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .connect_lazy(&config.database_url)
}

/// Table definitions, applied in order. Indexes are non-unique and declared
/// inline because MySQL has no `CREATE INDEX IF NOT EXISTS`.
///
/// Text columns are unbounded `TEXT`; indexed ones use a 191-character prefix,
/// the longest that fits InnoDB's key limit under utf8mb4.
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id BINARY(16) NOT NULL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id BINARY(16) NOT NULL PRIMARY KEY,
        company_id BINARY(16) NOT NULL,
        name TEXT NOT NULL,
        INDEX ix_customers_company_name (company_id, name(191))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id BINARY(16) NOT NULL PRIMARY KEY,
        company_id BINARY(16) NOT NULL,
        display_name TEXT NOT NULL,
        trade TEXT NOT NULL,
        INDEX ix_employees_company_display_name (company_id, display_name(191))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id BINARY(16) NOT NULL PRIMARY KEY,
        company_id BINARY(16) NOT NULL,
        customer_id BINARY(16) NOT NULL,
        name TEXT NOT NULL,
        code TEXT NOT NULL,
        INDEX ix_jobs_company_code (company_id, code(191))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS time_entries (
        id BINARY(16) NOT NULL PRIMARY KEY,
        company_id BINARY(16) NOT NULL,
        job_id BINARY(16) NOT NULL,
        employee_id BINARY(16) NOT NULL,
        work_date DATE NOT NULL,
        hours DECIMAL(18, 2) NOT NULL,
        notes TEXT NOT NULL,
        INDEX ix_time_entries_company_employee_date (company_id, employee_id, work_date)
    )
    "#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_columns_are_unbounded() {
        for statement in SCHEMA {
            assert!(!statement.contains("VARCHAR"), "bounded column in {statement}");
        }
        assert!(SCHEMA[4].contains("notes TEXT NOT NULL"));
        assert!(SCHEMA[4].contains("hours DECIMAL(18, 2) NOT NULL"));
    }

    #[test]
    fn indexed_text_columns_use_prefix() {
        assert!(SCHEMA[1].contains("(company_id, name(191))"));
        assert!(SCHEMA[2].contains("(company_id, display_name(191))"));
        assert!(SCHEMA[3].contains("(company_id, code(191))"));
        assert!(SCHEMA[4].contains("(company_id, employee_id, work_date)"));
    }
}
