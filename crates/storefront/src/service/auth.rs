use crate::{
    abstract_trait::{AuthServiceTrait, DynUserRepository},
    domain::{
        requests::{
            auth::{LoginRequest, RegisterRequest},
            user::CreateUserRecordRequest,
        },
        responses::{api::ApiResponse, token::TokenResponse, user::UserResponse},
    },
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::ServiceError,
};
use tracing::info;

#[derive(Clone)]
pub struct AuthService {
    user_repository: DynUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(user_repository: DynUserRepository, hashing: DynHashing, jwt: DynJwtService) -> Self {
        Self {
            user_repository,
            hashing,
            jwt,
        }
    }

    fn issue_tokens(&self, user_id: i32) -> Result<TokenResponse, ServiceError> {
        let access_token = self.jwt.generate_token(user_id as i64, "access")?;
        let refresh_token = self.jwt.generate_token(user_id as i64, "refresh")?;

        Ok(TokenResponse::bearer(access_token, refresh_token))
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let password_hash = self.hashing.hash_password(&req.password).await?;

        let record = CreateUserRecordRequest {
            email: req.email.clone(),
            password_hash,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            phone: req.phone.clone(),
        };

        let user = self.user_repository.create_user(&record).await?;

        info!("✅ Registered user {} ({})", user.user_id, user.email);

        Ok(ApiResponse::success(
            "User registered successfully",
            UserResponse::from(user),
        ))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        // A miss and a bad password both end up as InvalidCredentials so the
        // response does not reveal which emails exist.
        let user = self
            .user_repository
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password_hash, &req.password)
            .await?;

        let tokens = self.issue_tokens(user.user_id)?;

        info!("✅ User {} logged in", user.user_id);

        Ok(ApiResponse::success("Login successful", tokens))
    }

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user_id = self.jwt.verify_token(refresh_token, "refresh")?;

        let user_id =
            i32::try_from(user_id).map_err(|_| ServiceError::InvalidTokenType)?;

        // The account may have been removed since the token was issued.
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        let tokens = self.issue_tokens(user_id)?;

        Ok(ApiResponse::success("Token refreshed", tokens))
    }

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        Ok(ApiResponse::success(
            "Current user",
            UserResponse::from(user),
        ))
    }
}
