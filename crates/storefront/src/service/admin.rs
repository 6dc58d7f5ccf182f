use crate::{
    abstract_trait::{DashboardServiceTrait, DynAdminStatsRepository},
    domain::responses::{api::ApiResponse, dashboard::DashboardOverview},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

/// Products at or below this stock count show up on the dashboard.
const LOW_STOCK_THRESHOLD: i32 = 5;
const LOW_STOCK_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct DashboardService {
    stats_repository: DynAdminStatsRepository,
}

impl DashboardService {
    pub fn new(stats_repository: DynAdminStatsRepository) -> Self {
        Self { stats_repository }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn overview(&self) -> Result<ApiResponse<DashboardOverview>, ServiceError> {
        let sales = self.stats_repository.sales_analytics().await?;
        let catalog = self
            .stats_repository
            .catalog_analytics(LOW_STOCK_THRESHOLD)
            .await?;
        let low_stock = self
            .stats_repository
            .low_stock_products(LOW_STOCK_THRESHOLD, LOW_STOCK_LIMIT)
            .await?;

        Ok(ApiResponse::success(
            "Dashboard overview",
            DashboardOverview {
                sales,
                catalog,
                low_stock,
            },
        ))
    }
}
