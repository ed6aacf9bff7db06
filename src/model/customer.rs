use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub company_id: Uuid,

    #[serde(default)]
    #[schema(example = "Contoso Facilities")]
    pub name: String,
}

impl Customer {
    pub fn new(company_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            name: name.into(),
        }
    }
}
