use crate::{
    abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::requests::product::{CreateProductRecordRequest, FindAllProducts, UpdateProductRequest},
    model::product::Product,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// Sort columns are whitelisted; anything else falls back to product_id.
    fn order_clause(req: &FindAllProducts) -> String {
        let column = match req.sort_by.as_deref() {
            Some("name") => "name",
            Some("price") => "price_cents",
            Some("created_at") => "created_at",
            _ => "product_id",
        };

        let direction = match req.sort_order.as_deref() {
            Some("desc") => "DESC",
            _ => "ASC",
        };

        format!("ORDER BY {column} {direction}")
    }
}

const PRODUCT_FILTER: &str = r#"
    is_active = true
    AND ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
    AND ($2::int IS NULL OR category_id = $2)
    AND ($3::bigint IS NULL OR price_cents >= $3)
    AND ($4::bigint IS NULL OR price_cents <= $4)
"#;

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let page = req.page.max(1);
        let page_size = req.page_size.clamp(1, 100);
        let offset = (page - 1) as i64 * page_size as i64;

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM products WHERE {PRODUCT_FILTER}"))
                .bind(&req.search)
                .bind(req.category_id)
                .bind(req.min_price_cents)
                .bind(req.max_price_cents)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT * FROM products WHERE {PRODUCT_FILTER} {} LIMIT $5 OFFSET $6",
            Self::order_clause(req)
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(&req.search)
            .bind(req.category_id)
            .bind(req.min_price_cents)
            .bind(req.max_price_cents)
            .bind(page_size as i64)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((products, total))
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_id = $1")
            .bind(product_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE slug = $1 AND is_active = true",
        )
        .bind(slug)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM products WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(exists.is_some())
    }
}

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (name, slug, sku, description, price_cents, stock_quantity, image_url, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.slug)
        .bind(&req.sku)
        .bind(&req.description)
        .bind(req.price_cents)
        .bind(req.stock_quantity)
        .bind(&req.image_url)
        .bind(req.category_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let repo_err = RepositoryError::from(err);
            if repo_err.is_unique_violation(None) {
                return RepositoryError::AlreadyExists(format!(
                    "Product slug or SKU already exists for '{}'",
                    req.name
                ));
            }
            error!("❌ Failed to create product '{}': {:?}", req.name, repo_err);
            repo_err
        })?;

        info!("✅ Created product ID {} ({})", product.product_id, product.slug);
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
        slug: Option<&str>,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name           = COALESCE($2, name),
                slug           = COALESCE($3, slug),
                description    = COALESCE($4, description),
                price_cents    = COALESCE($5, price_cents),
                stock_quantity = COALESCE($6, stock_quantity),
                image_url      = COALESCE($7, image_url),
                category_id    = COALESCE($8, category_id),
                is_active      = COALESCE($9, is_active)
            WHERE product_id = $1
            RETURNING *
            "#,
        )
        .bind(product_id)
        .bind(&req.name)
        .bind(slug)
        .bind(&req.description)
        .bind(req.price_cents)
        .bind(req.stock_quantity)
        .bind(&req.image_url)
        .bind(req.category_id)
        .bind(req.is_active)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?;

        Ok(product)
    }

    async fn deactivate_product(&self, product_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            "UPDATE products SET is_active = false WHERE product_id = $1 AND is_active = true",
        )
        .bind(product_id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to deactivate product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?;

        info!("🗑️ Deactivated product {}", product_id);
        Ok(result.rows_affected() > 0)
    }
}
