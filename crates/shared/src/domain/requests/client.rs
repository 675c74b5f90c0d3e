use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[serde(rename = "nombre")]
    #[schema(example = "Ferreteria Central")]
    pub name: String,

    #[validate(length(min = 9, max = 20, message = "NIT must be 9 to 20 characters"))]
    #[serde(rename = "nit")]
    #[schema(example = "900123456")]
    pub tax_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[serde(rename = "nombre")]
    #[schema(example = "Ferreteria Central")]
    pub name: String,

    #[validate(length(min = 9, max = 20, message = "NIT must be 9 to 20 characters"))]
    #[serde(rename = "nit")]
    #[schema(example = "900123456")]
    pub tax_id: String,
}
