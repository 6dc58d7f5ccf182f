use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynProductQueryRepository},
    domain::{
        requests::cart::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{api::ApiResponse, cart::CartResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

#[derive(Clone)]
pub struct CartService {
    cart_repository: DynCartRepository,
    product_query: DynProductQueryRepository,
}

impl CartService {
    pub fn new(cart_repository: DynCartRepository, product_query: DynProductQueryRepository) -> Self {
        Self {
            cart_repository,
            product_query,
        }
    }

    async fn render_cart(&self, cart_id: i32) -> Result<CartResponse, ServiceError> {
        let items = self.cart_repository.list_items(cart_id).await?;
        Ok(CartResponse::from_items(items))
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.cart_repository.get_or_create_cart(user_id).await?;
        let cart_response = self.render_cart(cart.cart_id).await?;

        Ok(ApiResponse::success("Cart retrieved", cart_response))
    }

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        // Only active products may be added; stock itself is not reserved
        // until checkout.
        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Product with id {} not found", req.product_id))
            })?;

        if product.stock_quantity < req.quantity {
            return Err(ServiceError::InsufficientStock {
                product: product.name,
                available: product.stock_quantity,
            });
        }

        let cart = self.cart_repository.get_or_create_cart(user_id).await?;
        self.cart_repository
            .add_item(cart.cart_id, req.product_id, req.quantity)
            .await?;

        info!(
            "✅ User {} added product {} x{} to cart",
            user_id, req.product_id, req.quantity
        );

        let cart_response = self.render_cart(cart.cart_id).await?;
        Ok(ApiResponse::success("Item added to cart", cart_response))
    }

    async fn update_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.cart_repository.get_or_create_cart(user_id).await?;

        self.cart_repository
            .update_item(cart.cart_id, cart_item_id, req.quantity)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Cart item with id {cart_item_id} not found"))
            })?;

        let cart_response = self.render_cart(cart.cart_id).await?;
        Ok(ApiResponse::success("Cart item updated", cart_response))
    }

    async fn remove_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.cart_repository.get_or_create_cart(user_id).await?;

        let removed = self
            .cart_repository
            .remove_item(cart.cart_id, cart_item_id)
            .await?;

        if !removed {
            return Err(RepositoryError::NotFound(format!(
                "Cart item with id {cart_item_id} not found"
            ))
            .into());
        }

        let cart_response = self.render_cart(cart.cart_id).await?;
        Ok(ApiResponse::success("Cart item removed", cart_response))
    }
}
