use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::status::DatabaseStatus;
use crate::error::ProblemDetails;
use crate::model::{Company, Customer, Employee, Job, TimeEntry};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workit API",
        version = "1.0.0",
        description = r#"
## Workit time tracking

Back end for the Workit employee and owner apps. Records **companies**,
their **customers**, **employees** and **jobs**, and the daily **time entries**
employees log against jobs.

### Conventions
- Every record except a company is scoped by `companyId`
- Records are insert-only: each resource has a list (`GET`) and a create (`POST`)
- `workDate` is a calendar date (`YYYY-MM-DD`); `hours` is an exact decimal
- When the database cannot be reached every endpoint answers `503` with a
  problem document naming the operation that failed
"#,
    ),
    paths(
        crate::api::company::list_companies,
        crate::api::company::create_company,

        crate::api::customer::list_customers,
        crate::api::customer::create_customer,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,

        crate::api::job::list_jobs,
        crate::api::job::create_job,

        crate::api::time_entry::list_time_entries,
        crate::api::time_entry::create_time_entry,

        crate::api::status::database_status
    ),
    components(
        schemas(
            Company,
            Customer,
            Employee,
            Job,
            TimeEntry,
            DatabaseStatus,
            ProblemDetails
        )
    ),
    tags(
        (name = "Company", description = "Tenant companies"),
        (name = "Customer", description = "Customers of a company"),
        (name = "Employee", description = "Employees of a company"),
        (name = "Job", description = "Jobs done for customers"),
        (name = "TimeEntry", description = "Hours logged by employees against jobs"),
        (name = "Status", description = "Health probes"),
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the raw OpenAPI document. Mounted in development only.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets resolve
            .url("/api-doc/openapi.json", ApiDoc::openapi()),
    );
}
