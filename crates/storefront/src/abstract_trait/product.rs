use crate::{
    domain::{
        requests::product::{
            CreateProductRecordRequest, CreateProductRequest, FindAllProducts, UpdateProductRequest,
        },
        responses::{
            api::{ApiResponse, ApiResponsePagination},
            product::ProductResponse,
        },
    },
    model::product::Product,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Returns the page of active products plus the total row count for
    /// pagination.
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<Product, RepositoryError>;

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
        slug: Option<&str>,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Soft delete: flips `is_active` so historical orders keep their FK.
    async fn deactivate_product(&self, product_id: i32) -> Result<bool, RepositoryError>;
}

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;

    async fn find_by_slug(&self, slug: &str) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    async fn deactivate_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
