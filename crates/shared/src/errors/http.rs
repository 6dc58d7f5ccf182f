use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::InvalidAddress => HttpError::NotFound("Invalid address".into()),

            ServiceError::EmptyCart => HttpError::BadRequest("Your cart is empty".into()),

            ServiceError::InsufficientStock { product, available } => HttpError::BadRequest(
                format!("Not enough stock for {product}. Available: {available}"),
            ),

            ServiceError::OrderNotFound => HttpError::NotFound("Order not found".into()),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::InsufficientStock {
                    product_id,
                    available,
                } => HttpError::BadRequest(format!(
                    "Not enough stock for product {product_id}. Available: {available}"
                )),
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[test]
    fn invalid_address_maps_to_not_found() {
        assert_eq!(
            status_of(ServiceError::InvalidAddress),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn empty_cart_maps_to_bad_request() {
        assert_eq!(status_of(ServiceError::EmptyCart), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn insufficient_stock_maps_to_bad_request() {
        let err = ServiceError::InsufficientStock {
            product: "Mechanical Keyboard".into(),
            available: 2,
        };
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn order_not_found_maps_to_not_found() {
        assert_eq!(
            status_of(ServiceError::OrderNotFound),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        let err = ServiceError::Repo(RepositoryError::AlreadyExists("email taken".into()));
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }
}
