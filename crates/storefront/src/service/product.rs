use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
        ProductQueryServiceTrait,
    },
    domain::{
        requests::product::{
            CreateProductRecordRequest, CreateProductRequest, FindAllProducts, UpdateProductRequest,
        },
        responses::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::ProductResponse,
        },
    },
    utils::{generate_sku, slugify},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

const SLUG_ATTEMPTS: u32 = 20;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        Ok(ApiResponsePagination {
            status: "success".into(),
            message: "Products retrieved".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.query.find_by_slug(slug).await?.ok_or_else(|| {
            RepositoryError::NotFound(format!("Product with slug '{slug}' not found"))
        })?;

        Ok(ApiResponse::success(
            "Product retrieved",
            ProductResponse::from(product),
        ))
    }
}

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }

    async fn unique_slug(&self, name: &str) -> Result<String, ServiceError> {
        let base = slugify(name);

        if !self.query.slug_exists(&base).await? {
            return Ok(base);
        }

        for n in 2..=SLUG_ATTEMPTS {
            let candidate = format!("{base}-{n}");
            if !self.query.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Ok(format!("{base}-{SLUG_ATTEMPTS}"))
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let record = CreateProductRecordRequest {
            name: req.name.clone(),
            slug: self.unique_slug(&req.name).await?,
            sku: generate_sku(&req.name),
            description: req.description.clone(),
            price_cents: req.price_cents,
            stock_quantity: req.stock_quantity,
            image_url: req.image_url.clone(),
            category_id: req.category_id,
        };

        let product = self.command.create_product(&record).await?;

        Ok(ApiResponse::success(
            "Product created",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let slug = match &req.name {
            Some(name) => Some(self.unique_slug(name).await?),
            None => None,
        };

        let product = self
            .command
            .update_product(product_id, req, slug.as_deref())
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Product with id {product_id} not found"))
            })?;

        info!("✅ Updated product {}", product_id);

        Ok(ApiResponse::success(
            "Product updated",
            ProductResponse::from(product),
        ))
    }

    async fn deactivate_product(&self, product_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let deactivated = self.command.deactivate_product(product_id).await?;

        if !deactivated {
            return Err(RepositoryError::NotFound(format!(
                "Product with id {product_id} not found"
            ))
            .into());
        }

        Ok(ApiResponse::success("Product deactivated", ()))
    }
}
