use actix_web::{HttpRequest, HttpResponse, web};

use super::{CompanyQuery, created, run_db};
use crate::error::ApiError;
use crate::model::Employee;
use crate::store::EmployeeRepository;

/// List employees of a company
#[utoipa::path(
    get,
    path = "/api/employees",
    params(CompanyQuery),
    responses(
        (status = 200, description = "Employees ordered by display name", body = [Employee]),
        (status = 400, description = "Missing or malformed companyId"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    repo: web::Data<dyn EmployeeRepository>,
    query: web::Query<CompanyQuery>,
) -> Result<HttpResponse, ApiError> {
    let employees = run_db("loading employees", repo.list_employees(query.company_id)).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Malformed body"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    req: HttpRequest,
    repo: web::Data<dyn EmployeeRepository>,
    payload: web::Json<Employee>,
) -> Result<HttpResponse, ApiError> {
    let employee =
        run_db("creating an employee", repo.create_employee(payload.into_inner())).await?;
    Ok(created(&req, employee.id, &employee))
}
