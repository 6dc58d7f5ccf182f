use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{
        requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{api::ApiResponse, category::CategoryResponse},
    },
    utils::slugify,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

/// How many numbered suffixes to try before giving up and letting the
/// database unique constraint report the conflict.
const SLUG_ATTEMPTS: u32 = 20;

#[derive(Clone)]
pub struct CategoryService {
    category_repository: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(category_repository: DynCategoryRepository) -> Self {
        Self { category_repository }
    }

    async fn unique_slug(&self, name: &str) -> Result<String, ServiceError> {
        let base = slugify(name);

        if !self.category_repository.slug_exists(&base).await? {
            return Ok(base);
        }

        for n in 2..=SLUG_ATTEMPTS {
            let candidate = format!("{base}-{n}");
            if !self.category_repository.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Ok(format!("{base}-{SLUG_ATTEMPTS}"))
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let slug = self.unique_slug(&req.name).await?;

        let category = self
            .category_repository
            .create_category(&req.name, &slug, req.description.as_deref())
            .await?;

        info!("✅ Created category {} ({})", category.category_id, category.slug);

        Ok(ApiResponse::success(
            "Category created",
            CategoryResponse::from(category),
        ))
    }

    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.category_repository.find_all().await?;

        Ok(ApiResponse::success(
            "Categories retrieved",
            categories.into_iter().map(CategoryResponse::from).collect(),
        ))
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .category_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Category with slug '{slug}' not found"))
            })?;

        Ok(ApiResponse::success(
            "Category retrieved",
            CategoryResponse::from(category),
        ))
    }

    async fn update_category(
        &self,
        category_id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        // Renaming regenerates the slug; old links go stale rather than
        // keeping a slug that no longer matches the name.
        let slug = match &req.name {
            Some(name) => Some(self.unique_slug(name).await?),
            None => None,
        };

        let category = self
            .category_repository
            .update_category(
                category_id,
                req.name.as_deref(),
                slug.as_deref(),
                req.description.as_deref(),
            )
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Category with id {category_id} not found"))
            })?;

        Ok(ApiResponse::success(
            "Category updated",
            CategoryResponse::from(category),
        ))
    }

    async fn delete_category(&self, category_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let deleted = self.category_repository.delete_category(category_id).await?;

        if !deleted {
            return Err(RepositoryError::NotFound(format!(
                "Category with id {category_id} not found"
            ))
            .into());
        }

        info!("🗑️ Deleted category {}", category_id);

        Ok(ApiResponse::success("Category deleted", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::Category;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    #[derive(Default)]
    struct FakeCategoryRepository {
        categories: Mutex<HashMap<i32, Category>>,
    }

    impl FakeCategoryRepository {
        fn seed(&self, slug: &str) {
            let mut categories = self.categories.lock().unwrap();
            let id = categories.len() as i32 + 1;
            categories.insert(
                id,
                Category {
                    category_id: id,
                    name: slug.to_string(),
                    slug: slug.to_string(),
                    description: None,
                },
            );
        }
    }

    #[async_trait]
    impl crate::abstract_trait::CategoryRepositoryTrait for FakeCategoryRepository {
        async fn create_category(
            &self,
            name: &str,
            slug: &str,
            description: Option<&str>,
        ) -> Result<Category, RepositoryError> {
            let mut categories = self.categories.lock().unwrap();
            if categories.values().any(|c| c.slug == slug) {
                return Err(RepositoryError::AlreadyExists(slug.to_string()));
            }
            let id = categories.len() as i32 + 1;
            let category = Category {
                category_id: id,
                name: name.to_string(),
                slug: slug.to_string(),
                description: description.map(String::from),
            };
            categories.insert(id, category.clone());
            Ok(category)
        }

        async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
            Ok(self.categories.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, RepositoryError> {
            Ok(self.categories.lock().unwrap().get(&category_id).cloned())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .values()
                .find(|c| c.slug == slug)
                .cloned())
        }

        async fn slug_exists(&self, slug: &str) -> Result<bool, RepositoryError> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .values()
                .any(|c| c.slug == slug))
        }

        async fn update_category(
            &self,
            category_id: i32,
            name: Option<&str>,
            slug: Option<&str>,
            description: Option<&str>,
        ) -> Result<Option<Category>, RepositoryError> {
            let mut categories = self.categories.lock().unwrap();
            Ok(categories.get_mut(&category_id).map(|c| {
                if let Some(name) = name {
                    c.name = name.to_string();
                }
                if let Some(slug) = slug {
                    c.slug = slug.to_string();
                }
                if let Some(description) = description {
                    c.description = Some(description.to_string());
                }
                c.clone()
            }))
        }

        async fn delete_category(&self, category_id: i32) -> Result<bool, RepositoryError> {
            Ok(self.categories.lock().unwrap().remove(&category_id).is_some())
        }
    }

    fn service_with(repo: FakeCategoryRepository) -> CategoryService {
        CategoryService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn generates_slug_from_name() {
        let service = service_with(FakeCategoryRepository::default());

        let res = service
            .create_category(&CreateCategoryRequest {
                name: "Board Games & Puzzles".into(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(res.data.slug, "board-games-puzzles");
    }

    #[tokio::test]
    async fn suffixes_slug_on_collision() {
        let repo = FakeCategoryRepository::default();
        repo.seed("books");
        repo.seed("books-2");
        let service = service_with(repo);

        let res = service
            .create_category(&CreateCategoryRequest {
                name: "Books".into(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(res.data.slug, "books-3");
    }

    #[tokio::test]
    async fn missing_slug_is_not_found() {
        let service = service_with(FakeCategoryRepository::default());

        let err = service.find_by_slug("nope").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound(_))
        ));
    }
}
