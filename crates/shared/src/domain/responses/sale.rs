use crate::model::Sale;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct SaleResponse {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub sale_date: String,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
    pub total: f64,
    pub created_at: Option<String>,
}

impl From<Sale> for SaleResponse {
    fn from(value: Sale) -> Self {
        SaleResponse {
            id: value.id,
            sale_date: value.sale_date.to_string(),
            product_id: value.product_id,
            client_id: value.client_id,
            user_id: value.user_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            total: value.total,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
