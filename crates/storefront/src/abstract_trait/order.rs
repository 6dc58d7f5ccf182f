use crate::{
    domain::{
        requests::order::{
            CreateOrderRecordRequest, FindAllOrders, PlaceOrderRequest, UpdateOrderStatusRequest,
        },
        responses::{
            api::{ApiResponse, ApiResponsePagination},
            order::{OrderDetailResponse, OrderResponse},
        },
        status::OrderStatus,
    },
    model::{order::Order, order_item::OrderItem},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError>;

    async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError>;

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;

    /// Admin listing across all users, newest first.
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the whole order aggregate in one transaction: the order row,
    /// its item snapshots, the conditional stock decrements and the cart
    /// cleanup. Either everything commits or nothing does. A stock decrement
    /// that matches zero rows aborts with `RepositoryError::InsufficientStock`.
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;

    /// Returns `OrderNotFound` both when the order does not exist and when
    /// it belongs to another user, so callers cannot probe foreign orders.
    async fn find_detail(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;

    /// Admin listing across all users.
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    /// The checkout workflow: validate addresses, read the cart, check
    /// stock, compute the total, then persist everything atomically.
    async fn place_order(
        &self,
        user_id: i32,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;

    async fn update_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
