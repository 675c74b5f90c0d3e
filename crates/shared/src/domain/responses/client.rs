use crate::model::Client;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ClientResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        ClientResponse {
            id: value.id,
            name: value.name,
            tax_id: value.tax_id,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
