//! Repository traits for the five entities plus the health probe and the
//! seed hooks. Handlers depend on these through `web::Data<dyn Trait>`.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Company, Customer, Employee, Job, TimeEntry};
use crate::seed::SeedData;
use crate::utils::db_utils::{Condition, SqlValue};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::MySqlStore;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All companies, ordered by name.
    async fn list_companies(&self) -> Result<Vec<Company>, StoreError>;
    async fn create_company(&self, company: Company) -> Result<Company, StoreError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_customers(&self, company_id: Uuid) -> Result<Vec<Customer>, StoreError>;
    async fn create_customer(&self, customer: Customer) -> Result<Customer, StoreError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list_employees(&self, company_id: Uuid) -> Result<Vec<Employee>, StoreError>;
    async fn create_employee(&self, employee: Employee) -> Result<Employee, StoreError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list_jobs(&self, company_id: Uuid) -> Result<Vec<Job>, StoreError>;
    async fn create_job(&self, job: Job) -> Result<Job, StoreError>;
}

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Entries matching `filter`, newest work date first.
    async fn list_time_entries(&self, filter: &TimeEntryFilter)
    -> Result<Vec<TimeEntry>, StoreError>;
    async fn create_time_entry(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError>;
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Never fails: an unreachable store reports `false`.
    async fn can_connect(&self) -> bool;
}

#[async_trait]
pub trait SeedStore: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), StoreError>;
    async fn has_companies(&self) -> Result<bool, StoreError>;
    /// Inserts the whole set atomically.
    async fn insert_seed(&self, seed: &SeedData) -> Result<(), StoreError>;
}

/// Everything a running API needs from its backing store.
pub trait Store:
    CompanyRepository
    + CustomerRepository
    + EmployeeRepository
    + JobRepository
    + TimeEntryRepository
    + HealthCheck
    + SeedStore
{
}

impl<T> Store for T where
    T: CompanyRepository
        + CustomerRepository
        + EmployeeRepository
        + JobRepository
        + TimeEntryRepository
        + HealthCheck
        + SeedStore
{
}

/// Narrowing applied to a time entry listing. Date bounds are inclusive and
/// either side may be left open.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryFilter {
    pub company_id: Uuid,
    pub employee_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TimeEntryFilter {
    pub fn for_company(company_id: Uuid) -> Self {
        Self {
            company_id,
            employee_id: None,
            from: None,
            to: None,
        }
    }

    /// In-process evaluation of the same predicate, for the test store.
    #[cfg(test)]
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        entry.company_id == self.company_id
            && self.employee_id.is_none_or(|id| entry.employee_id == id)
            && self.from.is_none_or(|from| entry.work_date >= from)
            && self.to.is_none_or(|to| entry.work_date <= to)
    }

    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions = vec![Condition::new(
            "company_id = ?",
            SqlValue::Uuid(self.company_id),
        )];

        if let Some(employee_id) = self.employee_id {
            conditions.push(Condition::new("employee_id = ?", SqlValue::Uuid(employee_id)));
        }

        if let Some(from) = self.from {
            conditions.push(Condition::new("work_date >= ?", SqlValue::Date(from)));
        }

        if let Some(to) = self.to {
            conditions.push(Condition::new("work_date <= ?", SqlValue::Date(to)));
        }

        conditions
    }
}
