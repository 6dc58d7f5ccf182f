use crate::{
    abstract_trait::AdminStatsRepositoryTrait,
    domain::responses::dashboard::{CatalogAnalytics, LowStockProduct, SalesAnalytics},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};

pub struct AdminStatsRepository {
    db: ConnectionPool,
}

impl AdminStatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminStatsRepositoryTrait for AdminStatsRepository {
    async fn sales_analytics(&self) -> Result<SalesAnalytics, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let analytics = sqlx::query_as::<_, SalesAnalytics>(
            r#"
            SELECT COUNT(*)                                                   AS total_orders,
                   COUNT(*) FILTER (WHERE status = 'pending')                 AS pending_orders,
                   COUNT(*) FILTER (WHERE status = 'paid')                    AS paid_orders,
                   COUNT(*) FILTER (WHERE status = 'shipped')                 AS shipped_orders,
                   COUNT(*) FILTER (WHERE status = 'delivered')               AS delivered_orders,
                   COUNT(*) FILTER (WHERE status = 'cancelled')               AS cancelled_orders,
                   COALESCE(SUM(total_amount_cents)
                            FILTER (WHERE status <> 'cancelled'), 0)::bigint  AS total_revenue_cents
            FROM orders
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(analytics)
    }

    async fn catalog_analytics(
        &self,
        low_stock_threshold: i32,
    ) -> Result<CatalogAnalytics, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let analytics = sqlx::query_as::<_, CatalogAnalytics>(
            r#"
            SELECT (SELECT COUNT(*) FROM users)                                        AS total_users,
                   (SELECT COUNT(*) FROM products WHERE is_active = true)              AS total_products,
                   (SELECT COUNT(*) FROM products
                    WHERE is_active = true AND stock_quantity = 0)                     AS out_of_stock_products,
                   (SELECT COUNT(*) FROM products
                    WHERE is_active = true
                      AND stock_quantity > 0 AND stock_quantity <= $1)                 AS low_stock_products,
                   (SELECT COUNT(*) FROM reviews WHERE is_approved = false)            AS pending_reviews
            "#,
        )
        .bind(low_stock_threshold)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(analytics)
    }

    async fn low_stock_products(
        &self,
        threshold: i32,
        limit: i64,
    ) -> Result<Vec<LowStockProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, LowStockProduct>(
            r#"
            SELECT product_id, name, stock_quantity
            FROM products
            WHERE is_active = true AND stock_quantity <= $1
            ORDER BY stock_quantity ASC, product_id
            LIMIT $2
            "#,
        )
        .bind(threshold)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(products)
    }
}
