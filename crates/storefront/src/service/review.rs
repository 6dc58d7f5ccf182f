use crate::{
    abstract_trait::{DynReviewRepository, ReviewServiceTrait},
    domain::{
        requests::review::{CreateReviewRequest, UpdateReviewRequest},
        responses::{api::ApiResponse, review::ReviewResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

#[derive(Clone)]
pub struct ReviewService {
    review_repository: DynReviewRepository,
}

impl ReviewService {
    pub fn new(review_repository: DynReviewRepository) -> Self {
        Self { review_repository }
    }

    /// Loads the review and hides it behind not-found unless `user_id` wrote it.
    async fn check_ownership(&self, user_id: i32, review_id: i32) -> Result<(), ServiceError> {
        self.review_repository
            .find_by_id(review_id)
            .await?
            .filter(|r| r.user_id == user_id)
            .map(|_| ())
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Review with id {review_id} not found")).into()
            })
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn create_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        let review = self.review_repository.create_review(user_id, req).await?;

        info!(
            "✅ User {} reviewed product {} with rating {}",
            user_id, req.product_id, req.rating
        );

        Ok(ApiResponse::success(
            "Review submitted and awaiting approval",
            ReviewResponse::from(review),
        ))
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ReviewResponse>>, ServiceError> {
        let reviews = self
            .review_repository
            .find_approved_by_product(product_id)
            .await?;

        Ok(ApiResponse::success(
            "Reviews retrieved",
            reviews.into_iter().map(ReviewResponse::from).collect(),
        ))
    }

    async fn update_review(
        &self,
        user_id: i32,
        review_id: i32,
        req: &UpdateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        self.check_ownership(user_id, review_id).await?;

        let review = self.review_repository.update_review(review_id, req).await?;

        Ok(ApiResponse::success(
            "Review updated and awaiting approval",
            ReviewResponse::from(review),
        ))
    }

    async fn delete_review(
        &self,
        user_id: i32,
        review_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        self.check_ownership(user_id, review_id).await?;

        self.review_repository.delete_review(review_id).await?;

        info!("🗑️ User {} deleted review {}", user_id, review_id);

        Ok(ApiResponse::success("Review deleted", ()))
    }

    async fn approve_review(
        &self,
        review_id: i32,
    ) -> Result<ApiResponse<ReviewResponse>, ServiceError> {
        let review = self
            .review_repository
            .approve_review(review_id)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Review with id {review_id} not found"))
            })?;

        Ok(ApiResponse::success(
            "Review approved",
            ReviewResponse::from(review),
        ))
    }
}
