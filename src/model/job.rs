use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A piece of work done for one customer, identified on site by its `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub company_id: Uuid,

    pub customer_id: Uuid,

    #[serde(default)]
    #[schema(example = "Warehouse Fit-Out")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "WH-1001")]
    pub code: String,
}

impl Job {
    pub fn new(
        company_id: Uuid,
        customer_id: Uuid,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            customer_id,
            name: name.into(),
            code: code.into(),
        }
    }
}
