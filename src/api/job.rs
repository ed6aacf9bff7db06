use actix_web::{HttpRequest, HttpResponse, web};

use super::{CompanyQuery, created, run_db};
use crate::error::ApiError;
use crate::model::Job;
use crate::store::JobRepository;

/// List jobs of a company
#[utoipa::path(
    get,
    path = "/api/jobs",
    params(CompanyQuery),
    responses(
        (status = 200, description = "Jobs ordered by code", body = [Job]),
        (status = 400, description = "Missing or malformed companyId"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Job"
)]
pub async fn list_jobs(
    repo: web::Data<dyn JobRepository>,
    query: web::Query<CompanyQuery>,
) -> Result<HttpResponse, ApiError> {
    let jobs = run_db("loading jobs", repo.list_jobs(query.company_id)).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// Create job
#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = Job,
    responses(
        (status = 201, description = "Job created", body = Job),
        (status = 400, description = "Malformed body"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "Job"
)]
pub async fn create_job(
    req: HttpRequest,
    repo: web::Data<dyn JobRepository>,
    payload: web::Json<Job>,
) -> Result<HttpResponse, ApiError> {
    let job = run_db("creating a job", repo.create_job(payload.into_inner())).await?;
    Ok(created(&req, job.id, &job))
}
