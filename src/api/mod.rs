pub mod company;
pub mod customer;
pub mod employee;
pub mod job;
pub mod status;
pub mod time_entry;

use std::future::Future;

use actix_web::{HttpRequest, HttpResponse, http::header};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, error, info_span};
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::{ApiError, StoreError};

/// Query string shared by the company-scoped list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CompanyQuery {
    /// Company whose records are listed
    pub company_id: Uuid,
}

/// Runs one store call inside a `db.operation` span and turns its failure
/// into the HTTP error for `operation`.
pub async fn run_db<T, F>(operation: &'static str, call: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    call.instrument(info_span!("db.operation", operation))
        .await
        .map_err(|e| {
            match &e {
                StoreError::Unavailable(_) => {
                    error!(error = %e, operation, "Database unavailable while {operation}")
                }
                StoreError::Other(_) => {
                    error!(error = %e, operation, "Database call failed while {operation}")
                }
            }
            ApiError::from_store(&e, operation)
        })
}

/// `201 Created` pointing at `<request path>/<id>`.
pub fn created<T: Serialize>(req: &HttpRequest, id: Uuid, body: &T) -> HttpResponse {
    let location = format!("{}/{}", req.path().trim_end_matches('/'), id);

    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(body)
}
