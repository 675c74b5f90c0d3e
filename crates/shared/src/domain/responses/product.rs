use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i64,
    #[serde(rename = "producto")]
    pub name: String,
    #[serde(rename = "precio_compra")]
    pub purchase_price: f64,
    #[serde(rename = "precio_venta")]
    pub sale_price: f64,
    pub stock: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            purchase_price: value.purchase_price,
            sale_price: value.sale_price,
            stock: value.stock,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
