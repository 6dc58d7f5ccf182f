use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub order_number: String,
    pub total_amount_cents: i64,
    pub status: String,
    pub order_date: Option<NaiveDateTime>,
    pub shipped_at: Option<NaiveDateTime>,
}
