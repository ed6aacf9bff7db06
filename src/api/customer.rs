use actix_web::{HttpRequest, HttpResponse, web};

use super::{CompanyQuery, created, run_db};
use crate::error::ApiError;
use crate::model::Customer;
use crate::store::CustomerRepository;

/// List customers of a company
#[utoipa::path(
    get,
    path = "/api/customers",
    params(CompanyQuery),
    responses(
        (status = 200, description = "Customers ordered by name", body = [Customer]),
        (status = 400, description = "Missing or malformed companyId"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Customer"
)]
pub async fn list_customers(
    repo: web::Data<dyn CustomerRepository>,
    query: web::Query<CompanyQuery>,
) -> Result<HttpResponse, ApiError> {
    let customers = run_db("loading customers", repo.list_customers(query.company_id)).await?;
    Ok(HttpResponse::Ok().json(customers))
}

/// Create customer
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = Customer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Malformed body"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Customer"
)]
pub async fn create_customer(
    req: HttpRequest,
    repo: web::Data<dyn CustomerRepository>,
    payload: web::Json<Customer>,
) -> Result<HttpResponse, ApiError> {
    let customer =
        run_db("creating a customer", repo.create_customer(payload.into_inner())).await?;
    Ok(created(&req, customer.id, &customer))
}
