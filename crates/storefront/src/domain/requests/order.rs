use crate::domain::status::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    #[validate(range(min = 1))]
    pub shipping_address_id: i32,

    #[validate(range(min = 1))]
    pub billing_address_id: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams, Clone)]
pub struct FindAllOrders {
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Optional status filter (pending, paid, shipped, delivered, cancelled).
    pub status: Option<OrderStatus>,
}

/// Everything the command repository needs to persist an order in one
/// transaction. Assembled by the service after validation.
#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub user_id: i32,
    pub cart_id: i32,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub total_amount_cents: i64,
    pub items: Vec<CreateOrderItemRecordRequest>,
}

/// Price is the snapshot taken when the order was placed, not a live lookup.
#[derive(Debug, Clone)]
pub struct CreateOrderItemRecordRequest {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}
