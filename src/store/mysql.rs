use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{Executor, FromRow, MySql, MySqlPool};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    CompanyRepository, CustomerRepository, EmployeeRepository, HealthCheck, JobRepository,
    SeedStore, TimeEntryFilter, TimeEntryRepository,
};
use crate::db::SCHEMA;
use crate::error::StoreError;
use crate::model::{Company, Customer, Employee, Job, TimeEntry};
use crate::seed::SeedData;
use crate::utils::db_utils::{Condition, SqlSelect, SqlValue, bind_values, build_select_sql};

const COMPANY_COLUMNS: &[&str] = &["id", "name"];
const CUSTOMER_COLUMNS: &[&str] = &["id", "company_id", "name"];
const EMPLOYEE_COLUMNS: &[&str] = &["id", "company_id", "display_name", "trade"];
const JOB_COLUMNS: &[&str] = &["id", "company_id", "customer_id", "name", "code"];
const TIME_ENTRY_COLUMNS: &[&str] = &[
    "id",
    "company_id",
    "job_id",
    "employee_id",
    "work_date",
    "hours",
    "notes",
];

/// MySQL-backed store. Each call checks a connection out of the pool for its
/// own duration only.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<T>(&self, select: SqlSelect) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        debug!(sql = %select.sql, bindings = ?select.values, "Fetching rows");

        let query = bind_values(sqlx::query_as::<_, T>(&select.sql), select.values);
        Ok(query.fetch_all(&self.pool).await?)
    }
}

fn company_scope(company_id: Uuid) -> Vec<Condition> {
    vec![Condition::new("company_id = ?", SqlValue::Uuid(company_id))]
}

fn companies_select() -> SqlSelect {
    build_select_sql("companies", COMPANY_COLUMNS, Vec::new(), "name ASC")
}

fn customers_select(company_id: Uuid) -> SqlSelect {
    build_select_sql(
        "customers",
        CUSTOMER_COLUMNS,
        company_scope(company_id),
        "name ASC",
    )
}

fn employees_select(company_id: Uuid) -> SqlSelect {
    build_select_sql(
        "employees",
        EMPLOYEE_COLUMNS,
        company_scope(company_id),
        "display_name ASC",
    )
}

fn jobs_select(company_id: Uuid) -> SqlSelect {
    build_select_sql("jobs", JOB_COLUMNS, company_scope(company_id), "code ASC")
}

fn time_entries_select(filter: &TimeEntryFilter) -> SqlSelect {
    build_select_sql(
        "time_entries",
        TIME_ENTRY_COLUMNS,
        filter.conditions(),
        "work_date DESC",
    )
}

async fn insert_company<'e, E>(executor: E, company: &Company) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    sqlx::query("INSERT INTO companies (id, name) VALUES (?, ?)")
        .bind(company.id)
        .bind(&company.name)
        .execute(executor)
        .await?;
    Ok(())
}

async fn insert_customer<'e, E>(executor: E, customer: &Customer) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    sqlx::query("INSERT INTO customers (id, company_id, name) VALUES (?, ?, ?)")
        .bind(customer.id)
        .bind(customer.company_id)
        .bind(&customer.name)
        .execute(executor)
        .await?;
    Ok(())
}

async fn insert_employee<'e, E>(executor: E, employee: &Employee) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    sqlx::query(
        "INSERT INTO employees (id, company_id, display_name, trade) VALUES (?, ?, ?, ?)",
    )
    .bind(employee.id)
    .bind(employee.company_id)
    .bind(&employee.display_name)
    .bind(&employee.trade)
    .execute(executor)
    .await?;
    Ok(())
}

async fn insert_job<'e, E>(executor: E, job: &Job) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    sqlx::query(
        "INSERT INTO jobs (id, company_id, customer_id, name, code) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(job.id)
    .bind(job.company_id)
    .bind(job.customer_id)
    .bind(&job.name)
    .bind(&job.code)
    .execute(executor)
    .await?;
    Ok(())
}

async fn insert_time_entry<'e, E>(executor: E, entry: &TimeEntry) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    sqlx::query(
        r#"
        INSERT INTO time_entries
        (id, company_id, job_id, employee_id, work_date, hours, notes)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.id)
    .bind(entry.company_id)
    .bind(entry.job_id)
    .bind(entry.employee_id)
    .bind(entry.work_date)
    .bind(entry.hours)
    .bind(&entry.notes)
    .execute(executor)
    .await?;
    Ok(())
}

#[async_trait]
impl CompanyRepository for MySqlStore {
    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        self.fetch_all(companies_select()).await
    }

    async fn create_company(&self, company: Company) -> Result<Company, StoreError> {
        insert_company(&self.pool, &company).await?;
        info!(company_id = %company.id, "Company created");
        Ok(company)
    }
}

#[async_trait]
impl CustomerRepository for MySqlStore {
    async fn list_customers(&self, company_id: Uuid) -> Result<Vec<Customer>, StoreError> {
        self.fetch_all(customers_select(company_id)).await
    }

    async fn create_customer(&self, customer: Customer) -> Result<Customer, StoreError> {
        insert_customer(&self.pool, &customer).await?;
        info!(customer_id = %customer.id, company_id = %customer.company_id, "Customer created");
        Ok(customer)
    }
}

#[async_trait]
impl EmployeeRepository for MySqlStore {
    async fn list_employees(&self, company_id: Uuid) -> Result<Vec<Employee>, StoreError> {
        self.fetch_all(employees_select(company_id)).await
    }

    async fn create_employee(&self, employee: Employee) -> Result<Employee, StoreError> {
        insert_employee(&self.pool, &employee).await?;
        info!(employee_id = %employee.id, company_id = %employee.company_id, "Employee created");
        Ok(employee)
    }
}

#[async_trait]
impl JobRepository for MySqlStore {
    async fn list_jobs(&self, company_id: Uuid) -> Result<Vec<Job>, StoreError> {
        self.fetch_all(jobs_select(company_id)).await
    }

    async fn create_job(&self, job: Job) -> Result<Job, StoreError> {
        insert_job(&self.pool, &job).await?;
        info!(job_id = %job.id, company_id = %job.company_id, "Job created");
        Ok(job)
    }
}

#[async_trait]
impl TimeEntryRepository for MySqlStore {
    async fn list_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.fetch_all(time_entries_select(filter)).await
    }

    async fn create_time_entry(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        insert_time_entry(&self.pool, &entry).await?;
        info!(
            time_entry_id = %entry.id,
            employee_id = %entry.employee_id,
            work_date = %entry.work_date,
            "Time entry created"
        );
        Ok(entry)
    }
}

#[async_trait]
impl HealthCheck for MySqlStore {
    async fn can_connect(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database connectivity probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl SeedStore for MySqlStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn has_companies(&self) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert_seed(&self, seed: &SeedData) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        insert_company(&mut *tx, &seed.company).await?;
        insert_customer(&mut *tx, &seed.customer).await?;
        insert_employee(&mut *tx, &seed.employee).await?;
        insert_job(&mut *tx, &seed.job).await?;
        insert_time_entry(&mut *tx, &seed.time_entry).await?;

        tx.commit().await?;
        Ok(())
    }
}
