use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Decimal places kept for `hours`, matching the `DECIMAL(18, 2)` column.
pub const HOURS_SCALE: u32 = 2;

/// Hours worked by one employee on one job on one calendar day.
///
/// `hours` is an exact decimal. It is accepted as a JSON number or string and
/// always written back as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "0d4b8e2f-7c61-4a9b-8e3d-5a1c2b3d4e5f",
        "companyId": "1f0c6a4e-8a53-4d8e-9a55-1d3f64b0a001",
        "jobId": "9a8b7c6d-5e4f-4a3b-9c2d-1e0f9a8b7c6d",
        "employeeId": "6b7d3c1a-2f40-4c1e-b1a2-6f0e2d9c0b11",
        "workDate": "2024-01-15",
        "hours": "8.00",
        "notes": "Framing, second floor"
    })
)]
pub struct TimeEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub company_id: Uuid,

    pub job_id: Uuid,

    pub employee_id: Uuid,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub work_date: NaiveDate,

    #[schema(example = "8.00", value_type = String)]
    pub hours: Decimal,

    #[serde(default)]
    pub notes: String,
}

impl TimeEntry {
    /// Rounds `hours` half away from zero to the scale the database keeps, so
    /// the echoed entry matches what a later read returns.
    pub fn with_stored_precision(mut self) -> Self {
        self.hours = self
            .hours
            .round_dp_with_strategy(HOURS_SCALE, RoundingStrategy::MidpointAwayFromZero);
        self
    }
}
