use crate::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{api::ApiResponse, category::CategoryResponse},
    },
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryResponse>>)
    )
)]
pub async fn get_categories_handler(
    Extension(service): Extension<DynCategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    tag = "Category",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category detail", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category_handler(
    Extension(service): Extension<DynCategoryService>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_slug(&slug).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 403, description = "Admin required")
    )
)]
pub async fn create_category_handler(
    Extension(service): Extension<DynCategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category_handler(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_category(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category_handler(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_category(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/categories", get(get_categories_handler))
        .route("/api/categories/{slug}", get(get_category_handler))
        .layer(Extension(app_state.di_container.category_service.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/admin/categories", post(create_category_handler))
        .route("/api/admin/categories/{id}", put(update_category_handler))
        .route("/api/admin/categories/{id}", delete(delete_category_handler))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.di_container.user_repository.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
