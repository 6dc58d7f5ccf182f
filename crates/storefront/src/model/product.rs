use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock_quantity: i32,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}
