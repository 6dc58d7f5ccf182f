use crate::{
    abstract_trait::ReviewRepositoryTrait,
    domain::requests::review::{CreateReviewRequest, UpdateReviewRequest},
    model::review::Review,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ReviewRepository {
    db: ConnectionPool,
}

impl ReviewRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    async fn create_review(
        &self,
        user_id: i32,
        req: &CreateReviewRequest,
    ) -> Result<Review, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (user_id, product_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(req.product_id)
        .bind(req.rating)
        .bind(&req.comment)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let repo_err = RepositoryError::from(err);
            if repo_err.is_unique_violation(Some("reviews_user_id_product_id_key")) {
                return RepositoryError::AlreadyExists(format!(
                    "User {user_id} already reviewed product {}",
                    req.product_id
                ));
            }
            if repo_err.is_foreign_key_violation() {
                return RepositoryError::NotFound(format!(
                    "Product with id {} not found",
                    req.product_id
                ));
            }
            error!("❌ Failed to create review for product {}: {:?}", req.product_id, repo_err);
            repo_err
        })?;

        info!("✅ Created review {} on product {}", review.review_id, review.product_id);
        Ok(review)
    }

    async fn find_by_id(&self, review_id: i32) -> Result<Option<Review>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(review)
    }

    async fn find_approved_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<Review>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE product_id = $1 AND is_approved = true
            ORDER BY created_at DESC, review_id DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(reviews)
    }

    async fn update_review(
        &self,
        review_id: i32,
        req: &UpdateReviewRequest,
    ) -> Result<Review, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Edits drop the approval so moderation sees the new text again.
        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET rating      = COALESCE($2, rating),
                comment     = COALESCE($3, comment),
                is_approved = false
            WHERE review_id = $1
            RETURNING *
            "#,
        )
        .bind(review_id)
        .bind(req.rating)
        .bind(&req.comment)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update review {}: {:?}", review_id, err);
            RepositoryError::from(err)
        })?
        .ok_or_else(|| RepositoryError::NotFound(format!("Review with id {review_id} not found")))?;

        Ok(review)
    }

    async fn delete_review(&self, review_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete review {}: {:?}", review_id, err);
                RepositoryError::from(err)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn approve_review(&self, review_id: i32) -> Result<Option<Review>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let review = sqlx::query_as::<_, Review>(
            "UPDATE reviews SET is_approved = true WHERE review_id = $1 RETURNING *",
        )
        .bind(review_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to approve review {}: {:?}", review_id, err);
            RepositoryError::from(err)
        })?;

        if review.is_some() {
            info!("✅ Approved review {}", review_id);
        }

        Ok(review)
    }
}
