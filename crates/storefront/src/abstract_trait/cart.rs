use crate::{
    domain::{
        requests::cart::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{api::ApiResponse, cart::CartResponse},
    },
    model::cart::{Cart, CartItem, CartItemDetail},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn get_or_create_cart(&self, user_id: i32) -> Result<Cart, RepositoryError>;

    /// Cart lines joined with product name, price and stock. The order
    /// placement workflow reads these for its availability pre-check.
    async fn list_items(&self, cart_id: i32) -> Result<Vec<CartItemDetail>, RepositoryError>;

    /// Upsert: adding a product already in the cart bumps its quantity.
    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;

    async fn update_item(
        &self,
        cart_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;

    async fn remove_item(&self, cart_id: i32, cart_item_id: i32) -> Result<bool, RepositoryError>;
}

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

/// Every operation returns the full cart so clients can re-render without a
/// second request.
#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;

    async fn update_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;

    async fn remove_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
}
