use crate::{
    domain::{
        requests::review::{CreateReviewRequest, UpdateReviewRequest},
        responses::{api::ApiResponse, review::ReviewResponse},
    },
    model::review::Review,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynReviewRepository = Arc<dyn ReviewRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReviewRepositoryTrait {
    async fn create_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<Review, RepositoryError>;

    async fn find_by_id(&self, review_id: i32) -> Result<Option<Review>, RepositoryError>;

    /// Approved reviews only; pending ones stay invisible to shoppers.
    async fn find_approved_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<Review>, RepositoryError>;

    async fn update_review(
        &self,
        review_id: i32,
        req: &UpdateReviewRequest,
    ) -> Result<Review, RepositoryError>;

    async fn delete_review(&self, review_id: i32) -> Result<bool, RepositoryError>;

    async fn approve_review(&self, review_id: i32) -> Result<Option<Review>, RepositoryError>;
}

pub type DynReviewService = Arc<dyn ReviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReviewServiceTrait {
    async fn create_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError>;

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError>;

    /// Only the author may edit; anyone else gets a not-found.
    async fn update_review(
        &self,
        user_id: i32,
        review_id: i32,
        req: &UpdateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError>;

    async fn delete_review(
        &self,
        user_id: i32,
        review_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;

    async fn approve_review(
        &self,
        review_id: i32,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError>;
}
