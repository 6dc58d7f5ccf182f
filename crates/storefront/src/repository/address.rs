use crate::{
    abstract_trait::AddressRepositoryTrait,
    domain::requests::address::{CreateAddressRequest, UpdateAddressRequest},
    model::address::Address,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct AddressRepository {
    db: ConnectionPool,
}

impl AddressRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepositoryTrait for AddressRepository {
    async fn create_address(
        &self,
        user_id: i32,
        req: &CreateAddressRequest,
    ) -> Result<Address, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (user_id, label, street, city, state, postal_code, country, is_default)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&req.label)
        .bind(&req.street)
        .bind(&req.city)
        .bind(&req.state)
        .bind(&req.postal_code)
        .bind(&req.country)
        .bind(req.is_default)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create address for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created address ID {} for user {}",
            address.address_id, user_id
        );
        Ok(address)
    }

    async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<Address>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let addresses = sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE user_id = $1 ORDER BY address_id",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(addresses)
    }

    async fn find_by_id_for_user(
        &self,
        user_id: i32,
        address_id: i32,
    ) -> Result<Option<Address>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let address = sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE address_id = $1 AND user_id = $2",
        )
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(address)
    }

    async fn update_address(
        &self,
        user_id: i32,
        address_id: i32,
        req: &UpdateAddressRequest,
    ) -> Result<Option<Address>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let address = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET label       = COALESCE($3, label),
                street      = COALESCE($4, street),
                city        = COALESCE($5, city),
                state       = COALESCE($6, state),
                postal_code = COALESCE($7, postal_code),
                country     = COALESCE($8, country),
                is_default  = COALESCE($9, is_default)
            WHERE address_id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(address_id)
        .bind(user_id)
        .bind(&req.label)
        .bind(&req.street)
        .bind(&req.city)
        .bind(&req.state)
        .bind(&req.postal_code)
        .bind(&req.country)
        .bind(req.is_default)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update address {}: {:?}", address_id, err);
            RepositoryError::from(err)
        })?;

        Ok(address)
    }

    async fn delete_address(
        &self,
        user_id: i32,
        address_id: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM addresses WHERE address_id = $1 AND user_id = $2")
            .bind(address_id)
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete address {}: {:?}", address_id, err);
                RepositoryError::from(err)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
