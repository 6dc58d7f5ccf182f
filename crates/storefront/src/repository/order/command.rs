use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    domain::{requests::order::CreateOrderRecordRequest, status::OrderStatus},
    model::{order::Order, order_item::OrderItem},
    utils::generate_order_number,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info, warn};

/// Order numbers are random, so a collision is possible in principle. The
/// unique index on orders.order_number aborts the transaction when it
/// happens and we retry the whole thing with a fresh number.
const MAX_ORDER_NUMBER_ATTEMPTS: u32 = 3;

const ORDER_NUMBER_CONSTRAINT: &str = "orders_order_number_key";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn create_order_once(
        &self,
        req: &CreateOrderRecordRequest,
        order_number: &str,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx: Transaction<'_, Postgres> =
            self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders
                (user_id, shipping_address_id, billing_address_id, order_number,
                 total_amount_cents, status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(req.shipping_address_id)
        .bind(req.billing_address_id)
        .bind(order_number)
        .bind(req.total_amount_cents)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            // Conditional decrement: the WHERE clause only matches when enough
            // stock remains, so two concurrent orders can never both take the
            // last unit. Zero rows affected means somebody else got there first.
            let result = sqlx::query(
                r#"
                UPDATE products
                SET stock_quantity = stock_quantity - $2
                WHERE product_id = $1 AND stock_quantity >= $2
                "#,
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            if result.rows_affected() == 0 {
                let available: Option<i32> =
                    sqlx::query_scalar("SELECT stock_quantity FROM products WHERE product_id = $1")
                        .bind(item.product_id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(RepositoryError::from)?;

                // Dropping the transaction rolls back the order row and any
                // decrements already applied for earlier items.
                return Err(RepositoryError::InsufficientStock {
                    product_id: item.product_id,
                    available: available.unwrap_or(0),
                });
            }

            let order_item = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, unit_price_cents)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price_cents)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            items.push(order_item);
        }

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(req.cart_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok((order, items))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut attempt = 1;

        loop {
            let order_number = generate_order_number()
                .map_err(|err| RepositoryError::Custom(format!("order number: {err}")))?;

            match self.create_order_once(req, &order_number).await {
                Ok((order, items)) => {
                    info!(
                        "✅ Created order {} for user {} ({} items, total {} cents)",
                        order.order_number,
                        order.user_id,
                        items.len(),
                        order.total_amount_cents
                    );
                    return Ok((order, items));
                }
                Err(err)
                    if err.is_unique_violation(Some(ORDER_NUMBER_CONSTRAINT))
                        && attempt < MAX_ORDER_NUMBER_ATTEMPTS =>
                {
                    warn!(
                        "🔄 Order number {} collided, retrying (attempt {}/{})",
                        order_number, attempt, MAX_ORDER_NUMBER_ATTEMPTS
                    );
                    attempt += 1;
                }
                Err(err) => {
                    if !matches!(err, RepositoryError::InsufficientStock { .. }) {
                        error!("❌ Failed to create order for user {}: {:?}", req.user_id, err);
                    }
                    return Err(err);
                }
            }
        }
    }

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status     = $2,
                shipped_at = CASE WHEN $2 = 'shipped' THEN current_timestamp ELSE shipped_at END
            WHERE order_id = $1
            RETURNING *
            "#,
        )
        .bind(order_id)
        .bind(status.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })?;

        if let Some(order) = &order {
            info!("✅ Order {} moved to status {}", order.order_number, order.status);
        }

        Ok(order)
    }
}
