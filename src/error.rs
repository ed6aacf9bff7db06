use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;
use utoipa::ToSchema;

/// MySQL server error numbers that mean the server is overloaded, shutting
/// down, or could not complete the write in time. Lost or refused connections
/// reach us as `sqlx::Error::Io` instead.
const UNAVAILABLE_MYSQL_ERRORS: &[u16] = &[
    1040, // too many connections
    1053, // server shutdown in progress
    1205, // lock wait timeout
    1213, // deadlock
];

/// Failure returned by every fallible repository call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Other(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if is_unavailable(&err) {
            StoreError::Unavailable(err)
        } else {
            StoreError::Other(err)
        }
    }
}

fn is_unavailable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .try_downcast_ref::<MySqlDatabaseError>()
            .is_some_and(|mysql| UNAVAILABLE_MYSQL_ERRORS.contains(&mysql.number())),
        _ => false,
    }
}

/// RFC 9457 problem document returned for failed requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemDetails {
    #[schema(example = "https://tools.ietf.org/html/rfc9110#section-15.6.4")]
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(example = "Database unavailable")]
    pub title: String,
    #[schema(example = 503)]
    pub status: u16,
    #[schema(
        example = "The API could not access the database while loading companies. Check the database connection and try again."
    )]
    pub detail: String,
}

/// Error surfaced by HTTP handlers. `operation` reads as a gerund phrase,
/// e.g. "loading companies".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(
        "The API could not access the database while {operation}. Check the database connection and try again."
    )]
    DatabaseUnavailable { operation: &'static str },

    #[error("An unexpected error occurred while {operation}.")]
    Internal { operation: &'static str },
}

impl ApiError {
    pub fn from_store(err: &StoreError, operation: &'static str) -> Self {
        match err {
            StoreError::Unavailable(_) => ApiError::DatabaseUnavailable { operation },
            StoreError::Other(_) => ApiError::Internal { operation },
        }
    }

    fn problem(&self) -> ProblemDetails {
        let (kind, title) = match self {
            ApiError::DatabaseUnavailable { .. } => (
                "https://tools.ietf.org/html/rfc9110#section-15.6.4",
                "Database unavailable",
            ),
            ApiError::Internal { .. } => (
                "https://tools.ietf.org/html/rfc9110#section-15.6.1",
                "An error occurred while processing your request.",
            ),
        };

        ProblemDetails {
            kind: kind.to_string(),
            title: title.to_string(),
            status: self.status_code().as_u16(),
            detail: self.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DatabaseUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("application/problem+json")
            .json(self.problem())
    }
}
