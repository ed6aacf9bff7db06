use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::HealthCheck;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    #[schema(example = true)]
    pub database_available: bool,
    #[schema(example = "Database connection is available.")]
    pub message: String,
}

impl DatabaseStatus {
    pub fn from_probe(available: bool) -> Self {
        Self {
            database_available: available,
            message: if available {
                "Database connection is available.".to_string()
            } else {
                "Database connection is unavailable.".to_string()
            },
        }
    }
}

/// Database health probe
#[utoipa::path(
    get,
    path = "/api/status/database",
    responses(
        (status = 200, description = "Result of a connectivity probe", body = DatabaseStatus)
    ),
    tag = "Status"
)]
pub async fn database_status(health: web::Data<dyn HealthCheck>) -> impl Responder {
    let available = health.can_connect().await;
    HttpResponse::Ok().json(DatabaseStatus::from_probe(available))
}
