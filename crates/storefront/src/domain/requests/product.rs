use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub price_cents: i64,

    #[validate(range(min = 0))]
    pub stock_quantity: i32,

    #[validate(url)]
    pub image_url: Option<String>,

    pub category_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,

    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub category_id: Option<i32>,

    pub is_active: Option<bool>,
}

/// Internal record with the generated slug and SKU already attached.
#[derive(Debug, Clone)]
pub struct CreateProductRecordRequest {
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams, Clone)]
pub struct FindAllProducts {
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub page_size: i32,

    pub search: Option<String>,

    pub category_id: Option<i32>,

    #[validate(range(min = 0))]
    pub min_price_cents: Option<i64>,

    #[validate(range(min = 0))]
    pub max_price_cents: Option<i64>,

    /// One of: id, name, price, created_at.
    pub sort_by: Option<String>,

    /// Either asc or desc.
    pub sort_order: Option<String>,
}
