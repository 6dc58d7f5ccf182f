use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::order::FindAllOrders,
        responses::{
            api::{ApiResponse, ApiResponsePagination},
            order::{OrderDetailResponse, OrderResponse},
            pagination::Pagination,
        },
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_all_by_user(user_id).await?;

        Ok(ApiResponse::success(
            "Orders retrieved",
            orders.into_iter().map(OrderResponse::from).collect(),
        ))
    }

    async fn find_detail(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .filter(|order| order.user_id == user_id)
            .ok_or(ServiceError::OrderNotFound)?;

        let items = self.query.find_items(order_id).await?;

        Ok(ApiResponse::success(
            "Order retrieved",
            OrderDetailResponse::new(order, items),
        ))
    }

    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        Ok(ApiResponsePagination {
            status: "success".into(),
            message: "Orders retrieved".into(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }
}
