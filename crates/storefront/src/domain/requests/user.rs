use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Internal record built by the auth service once the password is hashed.
#[derive(Debug, Clone)]
pub struct CreateUserRecordRequest {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,
}
