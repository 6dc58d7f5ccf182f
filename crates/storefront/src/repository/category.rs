use crate::{abstract_trait::CategoryRepositoryTrait, model::category::Category};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn create_category(
        &self,
        name: &str,
        slug: &str,
        description: Option<&str>,
    ) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let repo_err = RepositoryError::from(err);
            if repo_err.is_unique_violation(Some("categories_slug_key")) {
                return RepositoryError::AlreadyExists(format!(
                    "Category slug '{slug}' already exists"
                ));
            }
            error!("❌ Failed to create category '{}': {:?}", name, repo_err);
            repo_err
        })?;

        info!("✅ Created category ID {}", category.category_id);
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(categories)
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE category_id = $1")
            .bind(category_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(category)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(category)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(exists.is_some())
    }

    async fn update_category(
        &self,
        category_id: i32,
        name: Option<&str>,
        slug: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name        = COALESCE($2, name),
                slug        = COALESCE($3, slug),
                description = COALESCE($4, description)
            WHERE category_id = $1
            RETURNING *
            "#,
        )
        .bind(category_id)
        .bind(name)
        .bind(slug)
        .bind(description)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category {}: {:?}", category_id, err);
            RepositoryError::from(err)
        })?;

        Ok(category)
    }

    async fn delete_category(&self, category_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete category {}: {:?}", category_id, err);
                RepositoryError::from(err)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
