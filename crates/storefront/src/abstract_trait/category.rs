use crate::{
    domain::{
        requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{api::ApiResponse, category::CategoryResponse},
    },
    model::category::Category,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn create_category(
        &self,
        name: &str,
        slug: &str,
        description: Option<&str>,
    ) -> Result<Category, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, RepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError>;

    async fn update_category(
        &self,
        category_id: i32,
        name: Option<&str>,
        slug: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Category>, RepositoryError>;

    async fn delete_category(&self, category_id: i32) -> Result<bool, RepositoryError>;
}

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;

    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;

    async fn find_by_slug(&self, slug: &str)
    -> Result<ApiResponse<CategoryResponse>, ServiceError>;

    async fn update_category(
        &self,
        category_id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;

    async fn delete_category(&self, category_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
