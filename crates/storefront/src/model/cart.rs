use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cart {
    pub cart_id: i32,
    pub user_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub cart_item_id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: Option<NaiveDateTime>,
}

/// A cart line joined with its product, as the order workflow consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItemDetail {
    pub cart_item_id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub stock_quantity: i32,
    pub quantity: i32,
}
