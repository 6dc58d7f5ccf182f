use crate::model::{order::Order, order_item::OrderItem};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub order_number: String,
    pub shipping_address_id: i32,
    pub billing_address_id: i32,
    pub total_amount_cents: i64,
    pub status: String,
    pub order_date: Option<NaiveDateTime>,
    pub shipped_at: Option<NaiveDateTime>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.order_id,
            user_id: order.user_id,
            order_number: order.order_number,
            shipping_address_id: order.shipping_address_id,
            billing_address_id: order.billing_address_id,
            total_amount_cents: order.total_amount_cents,
            status: order.status,
            order_date: order.order_date,
            shipped_at: order.shipped_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        let subtotal_cents = item.unit_price_cents * item.quantity as i64;
        Self {
            id: item.order_item_id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            subtotal_cents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}

impl OrderDetailResponse {
    pub fn new(order: Order, items: Vec<OrderItem>) -> Self {
        Self {
            order: OrderResponse::from(order),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
