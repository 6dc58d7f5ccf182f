use crate::{
    abstract_trait::{DynUserRepository, UserServiceTrait},
    domain::{
        requests::user::UpdateProfileRequest,
        responses::{api::ApiResponse, user::UserResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct UserService {
    user_repository: DynUserRepository,
}

impl UserService {
    pub fn new(user_repository: DynUserRepository) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self.user_repository.update_profile(user_id, req).await?;

        info!("✅ Updated profile of user {}", user_id);

        Ok(ApiResponse::success(
            "Profile updated",
            UserResponse::from(user),
        ))
    }
}
