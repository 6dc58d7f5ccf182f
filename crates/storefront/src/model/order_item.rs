use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Snapshot of a product at purchase time. Unit price is never updated after
/// creation, so later product price changes do not alter historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}
