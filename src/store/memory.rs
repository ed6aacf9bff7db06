//! In-process store used by handler tests. Mirrors the MySQL store's filters
//! and ordering, and can be switched into an unreachable state. Text sorts
//! ignore case, as MySQL's default collation does.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use super::{
    CompanyRepository, CustomerRepository, EmployeeRepository, HealthCheck, JobRepository,
    SeedStore, TimeEntryFilter, TimeEntryRepository,
};
use crate::error::StoreError;
use crate::model::{Company, Customer, Employee, Job, TimeEntry};
use crate::seed::SeedData;

#[derive(Default)]
pub struct MemoryStore {
    offline: AtomicBool,
    companies: Mutex<Vec<Company>>,
    customers: Mutex<Vec<Customer>>,
    employees: Mutex<Vec<Employee>>,
    jobs: Mutex<Vec<Job>>,
    time_entries: Mutex<Vec<TimeEntry>>,
}

impl MemoryStore {
    pub fn offline() -> Self {
        let store = Self::default();
        store.set_offline(true);
        store
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    pub fn company_count(&self) -> usize {
        self.companies.lock().unwrap().len()
    }
}

fn collate(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        self.check()?;
        let mut companies = self.companies.lock().unwrap().clone();
        companies.sort_by(|a, b| collate(&a.name, &b.name));
        Ok(companies)
    }

    async fn create_company(&self, company: Company) -> Result<Company, StoreError> {
        self.check()?;
        self.companies.lock().unwrap().push(company.clone());
        Ok(company)
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn list_customers(&self, company_id: Uuid) -> Result<Vec<Customer>, StoreError> {
        self.check()?;
        let mut customers: Vec<_> = self
            .customers
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.company_id == company_id)
            .cloned()
            .collect();
        customers.sort_by(|a, b| collate(&a.name, &b.name));
        Ok(customers)
    }

    async fn create_customer(&self, customer: Customer) -> Result<Customer, StoreError> {
        self.check()?;
        self.customers.lock().unwrap().push(customer.clone());
        Ok(customer)
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn list_employees(&self, company_id: Uuid) -> Result<Vec<Employee>, StoreError> {
        self.check()?;
        let mut employees: Vec<_> = self
            .employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.company_id == company_id)
            .cloned()
            .collect();
        employees.sort_by(|a, b| collate(&a.display_name, &b.display_name));
        Ok(employees)
    }

    async fn create_employee(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.check()?;
        self.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }
}

#[async_trait]
impl JobRepository for MemoryStore {
    async fn list_jobs(&self, company_id: Uuid) -> Result<Vec<Job>, StoreError> {
        self.check()?;
        let mut jobs: Vec<_> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| collate(&a.code, &b.code));
        Ok(jobs)
    }

    async fn create_job(&self, job: Job) -> Result<Job, StoreError> {
        self.check()?;
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }
}

#[async_trait]
impl TimeEntryRepository for MemoryStore {
    async fn list_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.check()?;
        let mut entries: Vec<_> = self
            .time_entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.work_date.cmp(&a.work_date));
        Ok(entries)
    }

    async fn create_time_entry(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.check()?;
        self.time_entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn can_connect(&self) -> bool {
        self.check().is_ok()
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn has_companies(&self) -> Result<bool, StoreError> {
        self.check()?;
        Ok(!self.companies.lock().unwrap().is_empty())
    }

    async fn insert_seed(&self, seed: &SeedData) -> Result<(), StoreError> {
        self.check()?;
        self.companies.lock().unwrap().push(seed.company.clone());
        self.customers.lock().unwrap().push(seed.customer.clone());
        self.employees.lock().unwrap().push(seed.employee.clone());
        self.jobs.lock().unwrap().push(seed.job.clone());
        self.time_entries.lock().unwrap().push(seed.time_entry.clone());
        Ok(())
    }
}
