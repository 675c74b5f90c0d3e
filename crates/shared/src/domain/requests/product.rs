use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[serde(rename = "producto")]
    #[schema(example = "Martillo")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Purchase price must be greater than zero"))]
    #[serde(rename = "precio_compra")]
    #[schema(example = 12.5)]
    pub purchase_price: f64,

    #[validate(range(min = 0.0, message = "Sale price cannot be negative"))]
    #[serde(rename = "precio_venta")]
    #[schema(example = 18.0)]
    pub sale_price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[serde(rename = "producto")]
    #[schema(example = "Martillo")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Purchase price must be greater than zero"))]
    #[serde(rename = "precio_compra")]
    #[schema(example = 12.5)]
    pub purchase_price: f64,

    #[validate(range(min = 0.0, message = "Sale price cannot be negative"))]
    #[serde(rename = "precio_venta")]
    #[schema(example = 18.0)]
    pub sale_price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i64,
}
