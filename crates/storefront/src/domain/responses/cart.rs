use crate::model::cart::CartItemDetail;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
    pub subtotal_cents: i64,
}

impl From<CartItemDetail> for CartItemResponse {
    fn from(item: CartItemDetail) -> Self {
        let subtotal_cents = item.unit_price_cents * item.quantity as i64;
        Self {
            id: item.cart_item_id,
            product_id: item.product_id,
            product_name: item.product_name,
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            subtotal_cents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub subtotal_cents: i64,
    pub total_items: i32,
}

impl CartResponse {
    pub fn from_items(items: Vec<CartItemDetail>) -> Self {
        let items: Vec<CartItemResponse> = items.into_iter().map(CartItemResponse::from).collect();
        let subtotal_cents = items.iter().map(|i| i.subtotal_cents).sum();
        let total_items = items.iter().map(|i| i.quantity).sum();

        Self {
            items,
            subtotal_cents,
            total_items,
        }
    }
}
