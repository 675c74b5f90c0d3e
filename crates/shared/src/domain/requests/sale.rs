use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    /// Defaults to today (UTC).
    #[serde(rename = "fecha", default)]
    #[schema(value_type = Option<String>, format = Date, example = "2025-06-01")]
    pub sale_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Invalid product id"))]
    #[serde(rename = "producto_id")]
    pub product_id: i64,

    #[validate(range(min = 1, message = "Invalid client id"))]
    #[serde(rename = "cliente_id")]
    pub client_id: i64,

    /// Defaults to the authenticated user.
    #[validate(range(min = 1, message = "Invalid user id"))]
    #[serde(rename = "usuario_id", default)]
    pub user_id: Option<i64>,

    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    #[serde(rename = "cantidad")]
    #[schema(example = 2)]
    pub quantity: i64,

    #[validate(range(min = 0.0, message = "Unit price cannot be negative"))]
    #[serde(rename = "precio_unitario")]
    #[schema(example = 18.0)]
    pub unit_price: f64,

    #[validate(range(min = 0.0, message = "Total cannot be negative"))]
    #[schema(example = 36.0)]
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSaleRequest {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "fecha")]
    #[schema(value_type = String, format = Date, example = "2025-06-01")]
    pub sale_date: NaiveDate,

    #[validate(range(min = 1, message = "Invalid product id"))]
    #[serde(rename = "producto_id")]
    pub product_id: i64,

    #[validate(range(min = 1, message = "Invalid client id"))]
    #[serde(rename = "cliente_id")]
    pub client_id: i64,

    #[validate(range(min = 1, message = "Invalid user id"))]
    #[serde(rename = "usuario_id")]
    pub user_id: i64,

    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    #[serde(rename = "cantidad")]
    pub quantity: i64,

    #[validate(range(min = 0.0, message = "Unit price cannot be negative"))]
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,

    #[validate(range(min = 0.0, message = "Total cannot be negative"))]
    pub total: f64,
}

/// A sale with every reference resolved, ready for the stock transaction.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub sale_date: NaiveDate,
    pub product_id: i64,
    pub client_id: i64,
    pub user_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
}
