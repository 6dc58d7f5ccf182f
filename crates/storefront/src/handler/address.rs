use crate::{
    abstract_trait::DynAddressService,
    domain::{
        requests::address::{CreateAddressRequest, UpdateAddressRequest},
        responses::{address::AddressResponse, api::ApiResponse},
    },
    middleware::{SimpleValidatedJson, auth_middleware},
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
    path = "/api/addresses",
    tag = "Address",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User addresses", body = ApiResponse<Vec<AddressResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_addresses_handler(
    Extension(service): Extension<DynAddressService>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/addresses",
    tag = "Address",
    security(("bearer_auth" = [])),
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address created", body = ApiResponse<AddressResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_address_handler(
    Extension(service): Extension<DynAddressService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAddressRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_address(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Address id")),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated", body = ApiResponse<AddressResponse>),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update_address_handler(
    Extension(service): Extension<DynAddressService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateAddressRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_address(user_id, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    tag = "Address",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete_address_handler(
    Extension(service): Extension<DynAddressService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_address(user_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn address_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/addresses", get(get_addresses_handler))
        .route("/api/addresses", post(create_address_handler))
        .route("/api/addresses/{id}", put(update_address_handler))
        .route("/api/addresses/{id}", delete(delete_address_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.address_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
