use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "6b7d3c1a-2f40-4c1e-b1a2-6f0e2d9c0b11",
        "companyId": "1f0c6a4e-8a53-4d8e-9a55-1d3f64b0a001",
        "displayName": "Alex Carpenter",
        "trade": "Carpenter"
    })
)]
pub struct Employee {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub company_id: Uuid,

    #[serde(default)]
    #[schema(example = "Alex Carpenter")]
    pub display_name: String,

    #[serde(default)]
    #[schema(example = "Carpenter")]
    pub trade: String,
}

impl Employee {
    pub fn new(company_id: Uuid, display_name: impl Into<String>, trade: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            display_name: display_name.into(),
            trade: trade.into(),
        }
    }
}
