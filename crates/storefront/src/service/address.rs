use crate::{
    abstract_trait::{AddressServiceTrait, DynAddressRepository},
    domain::{
        requests::address::{CreateAddressRequest, UpdateAddressRequest},
        responses::{address::AddressResponse, api::ApiResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

#[derive(Clone)]
pub struct AddressService {
    address_repository: DynAddressRepository,
}

impl AddressService {
    pub fn new(address_repository: DynAddressRepository) -> Self {
        Self { address_repository }
    }
}

#[async_trait]
impl AddressServiceTrait for AddressService {
    async fn create_address(
        &self,
        user_id: i32,
        req: &CreateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError> {
        let address = self.address_repository.create_address(user_id, req).await?;

        info!("✅ Created address {} for user {}", address.address_id, user_id);

        Ok(ApiResponse::success(
            "Address created",
            AddressResponse::from(address),
        ))
    }

    async fn find_all(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<AddressResponse>>, ServiceError> {
        let addresses = self.address_repository.find_all_by_user(user_id).await?;

        Ok(ApiResponse::success(
            "Addresses retrieved",
            addresses.into_iter().map(AddressResponse::from).collect(),
        ))
    }

    async fn update_address(
        &self,
        user_id: i32,
        address_id: i32,
        req: &UpdateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError> {
        let address = self
            .address_repository
            .update_address(user_id, address_id, req)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Address with id {address_id} not found"))
            })?;

        Ok(ApiResponse::success(
            "Address updated",
            AddressResponse::from(address),
        ))
    }

    async fn delete_address(
        &self,
        user_id: i32,
        address_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let deleted = self
            .address_repository
            .delete_address(user_id, address_id)
            .await?;

        if !deleted {
            return Err(RepositoryError::NotFound(format!(
                "Address with id {address_id} not found"
            ))
            .into());
        }

        info!("🗑️ Deleted address {} of user {}", address_id, user_id);

        Ok(ApiResponse::success("Address deleted", ()))
    }
}
