use actix_web::{HttpRequest, HttpResponse, web};

use super::{created, run_db};
use crate::error::ApiError;
use crate::model::Company;
use crate::store::CompanyRepository;

/// List companies
#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "All companies ordered by name", body = [Company]),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Company"
)]
pub async fn list_companies(
    repo: web::Data<dyn CompanyRepository>,
) -> Result<HttpResponse, ApiError> {
    let companies = run_db("loading companies", repo.list_companies()).await?;
    Ok(HttpResponse::Ok().json(companies))
}

/// Create company
#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = Company,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Malformed body"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Company"
)]
pub async fn create_company(
    req: HttpRequest,
    repo: web::Data<dyn CompanyRepository>,
    payload: web::Json<Company>,
) -> Result<HttpResponse, ApiError> {
    let company = run_db("creating a company", repo.create_company(payload.into_inner())).await?;
    Ok(created(&req, company.id, &company))
}
