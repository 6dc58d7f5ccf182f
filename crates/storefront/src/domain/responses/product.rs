use crate::model::product::Product;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
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

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price_cents: product.price_cents,
            stock_quantity: product.stock_quantity,
            sku: product.sku,
            image_url: product.image_url,
            category_id: product.category_id,
            is_active: product.is_active,
            created_at: product.created_at,
        }
    }
}
