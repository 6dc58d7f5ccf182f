use crate::{
    abstract_trait::{DynProductQueryService, DynReviewService},
    domain::{
        requests::review::{CreateReviewRequest, UpdateReviewRequest},
        responses::{api::ApiResponse, review::ReviewResponse},
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
    path = "/api/products/{slug}/reviews",
    tag = "Review",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Approved reviews for a product", body = ApiResponse<Vec<ReviewResponse>>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_reviews_handler(
    Extension(products): Extension<DynProductQueryService>,
    Extension(service): Extension<DynReviewService>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let product = products.find_by_slug(&slug).await?;
    let response = service.find_by_product(product.data.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Review",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewResponse>),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Already reviewed this product")
    )
)]
pub async fn create_review_handler(
    Extension(service): Extension<DynReviewService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_review(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = "Review",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review id")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewResponse>),
        (status = 404, description = "Review not found")
    )
)]
pub async fn update_review_handler(
    Extension(service): Extension<DynReviewService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateReviewRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_review(user_id, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "Review",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review_handler(
    Extension(service): Extension<DynReviewService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_review(user_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}/approve",
    tag = "Review",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review approved", body = ApiResponse<ReviewResponse>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn approve_review_handler(
    Extension(service): Extension<DynReviewService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.approve_review(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn review_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public = OpenApiRouter::new()
        .route(
            "/api/products/{slug}/reviews",
            get(get_product_reviews_handler),
        )
        .layer(Extension(
            app_state.di_container.product_query_service.clone(),
        ));

    let private = OpenApiRouter::new()
        .route("/api/reviews", post(create_review_handler))
        .route("/api/reviews/{id}", put(update_review_handler))
        .route("/api/reviews/{id}", delete(delete_review_handler))
        .route_layer(middleware::from_fn(auth_middleware));

    let admin = OpenApiRouter::new()
        .route(
            "/api/admin/reviews/{id}/approve",
            put(approve_review_handler),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_repository.clone()));

    public
        .merge(private)
        .merge(admin)
        .layer(Extension(app_state.di_container.review_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
