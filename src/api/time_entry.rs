use actix_web::{HttpRequest, HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::{created, run_db};
use crate::error::ApiError;
use crate::model::TimeEntry;
use crate::store::{TimeEntryFilter, TimeEntryRepository};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TimeEntryQuery {
    /// Company whose entries are listed
    pub company_id: Uuid,
    /// Only entries for this employee
    pub employee_id: Option<Uuid>,
    /// Earliest work date, inclusive
    pub from: Option<NaiveDate>,
    /// Latest work date, inclusive
    pub to: Option<NaiveDate>,
}

impl From<TimeEntryQuery> for TimeEntryFilter {
    fn from(query: TimeEntryQuery) -> Self {
        Self {
            company_id: query.company_id,
            employee_id: query.employee_id,
            from: query.from,
            to: query.to,
        }
    }
}

/// List time entries
#[utoipa::path(
    get,
    path = "/api/timeentries",
    params(TimeEntryQuery),
    responses(
        (status = 200, description = "Matching entries, newest work date first", body = [TimeEntry]),
        (status = 400, description = "Missing or malformed query parameter"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "TimeEntry"
)]
pub async fn list_time_entries(
    repo: web::Data<dyn TimeEntryRepository>,
    query: web::Query<TimeEntryQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = TimeEntryFilter::from(query.into_inner());
    let entries = run_db("loading time entries", repo.list_time_entries(&filter)).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// Create time entry
#[utoipa::path(
    post,
    path = "/api/timeentries",
    request_body = TimeEntry,
    responses(
        (status = 201, description = "Time entry created", body = TimeEntry),
        (status = 400, description = "Malformed body"),
        (status = 503, description = "Database unavailable", body = ProblemDetails)
    ),
    tag = "TimeEntry"
)]
pub async fn create_time_entry(
    req: HttpRequest,
    repo: web::Data<dyn TimeEntryRepository>,
    payload: web::Json<TimeEntry>,
) -> Result<HttpResponse, ApiError> {
    let entry = payload.into_inner().with_stored_precision();
    let entry = run_db("creating a time entry", repo.create_time_entry(entry)).await?;
    Ok(created(&req, entry.id, &entry))
}
