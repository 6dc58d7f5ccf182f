use crate::domain::responses::{
    api::ApiResponse,
    dashboard::{CatalogAnalytics, DashboardOverview, LowStockProduct, SalesAnalytics},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynAdminStatsRepository = Arc<dyn AdminStatsRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AdminStatsRepositoryTrait {
    async fn sales_analytics(&self) -> Result<SalesAnalytics, RepositoryError>;

    async fn catalog_analytics(
        &self,
        low_stock_threshold: i32,
    ) -> Result<CatalogAnalytics, RepositoryError>;

    async fn low_stock_products(
        &self,
        threshold: i32,
        limit: i64,
    ) -> Result<Vec<LowStockProduct>, RepositoryError>;
}

pub type DynDashboardService = Arc<dyn DashboardServiceTrait + Send + Sync>;

#[async_trait]
pub trait DashboardServiceTrait {
    async fn overview(&self) -> Result<ApiResponse<DashboardOverview>, ServiceError>;
}
