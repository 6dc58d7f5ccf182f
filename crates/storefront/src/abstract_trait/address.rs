use crate::{
    domain::{
        requests::address::{CreateAddressRequest, UpdateAddressRequest},
        responses::{address::AddressResponse, api::ApiResponse},
    },
    model::address::Address,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynAddressRepository = Arc<dyn AddressRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AddressRepositoryTrait {
    async fn create_address(
        &self,
        user_id: i32,
        req: &CreateAddressRequest,
    ) -> Result<Address, RepositoryError>;

    async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<Address>, RepositoryError>;

    /// Ownership check built in: returns None when the address does not
    /// exist or belongs to another user.
    async fn find_by_id_for_user(
        &self,
        user_id: i32,
        address_id: i32,
    ) -> Result<Option<Address>, RepositoryError>;

    async fn update_address(
        &self,
        user_id: i32,
        address_id: i32,
        req: &UpdateAddressRequest,
    ) -> Result<Option<Address>, RepositoryError>;

    async fn delete_address(&self, user_id: i32, address_id: i32)
    -> Result<bool, RepositoryError>;
}

pub type DynAddressService = Arc<dyn AddressServiceTrait + Send + Sync>;

#[async_trait]
pub trait AddressServiceTrait {
    async fn create_address(
        &self,
        user_id: i32,
        req: &CreateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError>;

    async fn find_all(&self, user_id: i32)
    -> Result<ApiResponse<Vec<AddressResponse>>, ServiceError>;

    async fn update_address(
        &self,
        user_id: i32,
        address_id: i32,
        req: &UpdateAddressRequest,
    ) -> Result<ApiResponse<AddressResponse>, ServiceError>;

    async fn delete_address(
        &self,
        user_id: i32,
        address_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
