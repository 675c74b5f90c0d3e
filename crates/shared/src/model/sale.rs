use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,
    pub sale_date: NaiveDate,
    pub product_id: i64,
    pub client_id: i64,
    pub user_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub created_at: Option<NaiveDateTime>,
}
