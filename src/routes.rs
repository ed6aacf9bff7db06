use std::sync::Arc;

use actix_web::web::{self, Data};

use crate::api::{company, customer, employee, job, status, time_entry};
use crate::store::{
    CompanyRepository, CustomerRepository, EmployeeRepository, HealthCheck, JobRepository,
    Store, TimeEntryRepository,
};

/// Exposes `store` to handlers once per repository trait.
pub fn register_store<S: Store + 'static>(cfg: &mut web::ServiceConfig, store: Arc<S>) {
    cfg.app_data(Data::from(store.clone() as Arc<dyn CompanyRepository>))
        .app_data(Data::from(store.clone() as Arc<dyn CustomerRepository>))
        .app_data(Data::from(store.clone() as Arc<dyn EmployeeRepository>))
        .app_data(Data::from(store.clone() as Arc<dyn JobRepository>))
        .app_data(Data::from(store.clone() as Arc<dyn TimeEntryRepository>))
        .app_data(Data::from(store as Arc<dyn HealthCheck>));
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.service(
        web::scope(api_prefix)
            // /companies
            .service(
                web::resource("/companies")
                    .route(web::get().to(company::list_companies))
                    .route(web::post().to(company::create_company)),
            )
            // /customers?companyId=
            .service(
                web::resource("/customers")
                    .route(web::get().to(customer::list_customers))
                    .route(web::post().to(customer::create_customer)),
            )
            // /employees?companyId=
            .service(
                web::resource("/employees")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /jobs?companyId=
            .service(
                web::resource("/jobs")
                    .route(web::get().to(job::list_jobs))
                    .route(web::post().to(job::create_job)),
            )
            // /timeentries?companyId=&employeeId=&from=&to=
            .service(
                web::resource("/timeentries")
                    .route(web::get().to(time_entry::list_time_entries))
                    .route(web::post().to(time_entry::create_time_entry)),
            )
            .service(
                web::resource("/status/database").route(web::get().to(status::database_status)),
            ),
    );
}
