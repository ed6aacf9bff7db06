use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::StoreError;
use crate::model::{Company, Customer, Employee, Job, TimeEntry};
use crate::store::SeedStore;

/// One linked company/customer/employee/job/time-entry chain for local use.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub company: Company,
    pub customer: Customer,
    pub employee: Employee,
    pub job: Job,
    pub time_entry: TimeEntry,
}

impl SeedData {
    pub fn demo(work_date: NaiveDate) -> Self {
        let company = Company::new("Demo Construction");
        let customer = Customer::new(company.id, "Contoso Facilities");
        let employee = Employee::new(company.id, "Alex Carpenter", "Carpenter");
        let job = Job::new(company.id, customer.id, "Warehouse Fit-Out", "WH-1001");
        let time_entry = TimeEntry {
            id: uuid::Uuid::new_v4(),
            company_id: company.id,
            job_id: job.id,
            employee_id: employee.id,
            work_date,
            hours: Decimal::new(8, 0),
            notes: "Initial demo entry".to_string(),
        };

        Self {
            company,
            customer,
            employee,
            job,
            time_entry,
        }
    }
}

/// Creates the schema and, if no company exists yet, inserts the demo chain.
/// Returns whether anything was inserted.
pub async fn ensure_seeded<S>(store: &S, today: NaiveDate) -> Result<bool, StoreError>
where
    S: SeedStore + ?Sized,
{
    store.ensure_schema().await?;

    if store.has_companies().await? {
        info!("Database already contains companies, skipping seed");
        return Ok(false);
    }

    let seed = SeedData::demo(today);
    store.insert_seed(&seed).await?;

    info!(company_id = %seed.company.id, "Seeded demo company");
    Ok(true)
}
