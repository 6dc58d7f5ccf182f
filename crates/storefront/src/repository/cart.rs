use crate::{
    abstract_trait::CartRepositoryTrait,
    model::cart::{Cart, CartItem, CartItemDetail},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const CART_ITEM_DETAIL_SQL: &str = r#"
    SELECT ci.cart_item_id,
           ci.cart_id,
           ci.product_id,
           p.name AS product_name,
           p.price_cents AS unit_price_cents,
           p.stock_quantity,
           ci.quantity
    FROM cart_items ci
    JOIN products p ON p.product_id = ci.product_id
    WHERE ci.cart_id = $1
    ORDER BY ci.cart_item_id
"#;

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn get_or_create_cart(&self, user_id: i32) -> Result<Cart, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // carts.user_id is unique, so the conflict path hits at most one row.
        let cart = sqlx::query_as::<_, Cart>(
            r#"
            INSERT INTO carts (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING *
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to get or create cart for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        Ok(cart)
    }

    async fn list_items(&self, cart_id: i32) -> Result<Vec<CartItemDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, CartItemDetail>(CART_ITEM_DETAIL_SQL)
            .bind(cart_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
            RETURNING *
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let repo_err = RepositoryError::from(err);
            if repo_err.is_foreign_key_violation() {
                return RepositoryError::NotFound(format!(
                    "Product with id {product_id} not found"
                ));
            }
            error!("❌ Failed to add product {} to cart {}: {:?}", product_id, cart_id, repo_err);
            repo_err
        })?;

        info!("✅ Added product {} x{} to cart {}", product_id, quantity, cart_id);
        Ok(item)
    }

    async fn update_item(
        &self,
        cart_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            UPDATE cart_items
            SET quantity = $3
            WHERE cart_item_id = $2 AND cart_id = $1
            RETURNING *
            "#,
        )
        .bind(cart_id)
        .bind(cart_item_id)
        .bind(quantity)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update cart item {} in cart {}: {:?}",
                cart_item_id, cart_id, err
            );
            RepositoryError::from(err)
        })?;

        Ok(item)
    }

    async fn remove_item(&self, cart_id: i32, cart_item_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result =
            sqlx::query("DELETE FROM cart_items WHERE cart_item_id = $2 AND cart_id = $1")
                .bind(cart_id)
                .bind(cart_item_id)
                .execute(&mut *conn)
                .await
                .map_err(|err| {
                    error!(
                        "❌ Failed to remove cart item {} from cart {}: {:?}",
                        cart_item_id, cart_id, err
                    );
                    RepositoryError::from(err)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
