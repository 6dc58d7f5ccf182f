use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct SalesAnalytics {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub paid_orders: i64,
    pub shipped_orders: i64,
    pub delivered_orders: i64,
    pub cancelled_orders: i64,
    /// Revenue over non-cancelled orders, in cents.
    pub total_revenue_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct CatalogAnalytics {
    pub total_users: i64,
    pub total_products: i64,
    pub out_of_stock_products: i64,
    pub low_stock_products: i64,
    pub pending_reviews: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct LowStockProduct {
    pub product_id: i32,
    pub name: String,
    pub stock_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardOverview {
    pub sales: SalesAnalytics,
    pub catalog: CatalogAnalytics,
    pub low_stock: Vec<LowStockProduct>,
}
