use crate::abstract_trait::DynUserRepository;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            status: "error".to_string(),
            message: message.to_string(),
        }),
    )
}

/// Verifies the bearer token and stores the authenticated user id in the
/// request extensions for handlers downstream.
pub async fn auth_middleware(
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned));

    let token = match token {
        Some(token) => token,
        None => {
            return Err(reject(
                StatusCode::UNAUTHORIZED,
                "You are not logged in, please provide a token",
            ));
        }
    };

    let user_id = match jwt.verify_token(&token, "access") {
        Ok(id) => id as i32,
        Err(_) => return Err(reject(StatusCode::UNAUTHORIZED, "Invalid token")),
    };

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}

/// Runs after `auth_middleware` and additionally requires the admin role.
pub async fn admin_middleware(
    Extension(user_repository): Extension<DynUserRepository>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let user_id = match req.extensions().get::<i32>() {
        Some(user_id) => *user_id,
        None => {
            return Err(reject(
                StatusCode::UNAUTHORIZED,
                "You are not logged in, please provide a token",
            ));
        }
    };

    let user = match user_repository.find_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(reject(StatusCode::UNAUTHORIZED, "Account no longer exists")),
        Err(_) => {
            return Err(reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify permissions",
            ));
        }
    };

    if !user.is_admin() {
        return Err(reject(
            StatusCode::FORBIDDEN,
            "Admin privileges are required",
        ));
    }

    Ok(next.run(req).await)
}
