use crate::{
    abstract_trait::{DynDashboardService, DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::order::{FindAllOrders, UpdateOrderStatusRequest},
        responses::{
            api::{ApiResponse, ApiResponsePagination},
            dashboard::DashboardOverview,
            order::OrderResponse,
        },
    },
    middleware::{SimpleValidatedJson, admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Store overview", body = ApiResponse<DashboardOverview>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_dashboard_handler(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.overview().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(FindAllOrders),
    responses(
        (status = 200, description = "Orders across all users", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_all_orders_handler(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid status transition"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order_status_handler(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/dashboard", get(get_dashboard_handler))
        .route("/api/admin/orders", get(get_all_orders_handler))
        .route(
            "/api/admin/orders/{id}/status",
            put(update_order_status_handler),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.dashboard_service.clone()))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(
            app_state.di_container.order_command_service.clone(),
        ))
        .layer(Extension(app_state.di_container.user_repository.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
