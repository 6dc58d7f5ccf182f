use crate::{
    abstract_trait::{
        DynAddressRepository, DynCartRepository, DynOrderCommandRepository,
        DynOrderQueryRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::order::{
            CreateOrderItemRecordRequest, CreateOrderRecordRequest, PlaceOrderRequest,
            UpdateOrderStatusRequest,
        },
        responses::{
            api::ApiResponse,
            order::{OrderDetailResponse, OrderResponse},
        },
        status::OrderStatus,
    },
    model::cart::CartItemDetail,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

#[derive(Clone)]
pub struct OrderCommandService {
    address_repository: DynAddressRepository,
    cart_repository: DynCartRepository,
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(
        address_repository: DynAddressRepository,
        cart_repository: DynCartRepository,
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
    ) -> Self {
        Self {
            address_repository,
            cart_repository,
            query,
            command,
        }
    }

    async fn check_address(&self, user_id: i32, address_id: i32) -> Result<(), ServiceError> {
        self.address_repository
            .find_by_id_for_user(user_id, address_id)
            .await?
            .map(|_| ())
            .ok_or(ServiceError::InvalidAddress)
    }

    fn product_name(items: &[CartItemDetail], product_id: i32) -> String {
        items
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.product_name.clone())
            .unwrap_or_else(|| format!("product {product_id}"))
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn place_order(
        &self,
        user_id: i32,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        self.check_address(user_id, req.shipping_address_id).await?;
        if req.billing_address_id != req.shipping_address_id {
            self.check_address(user_id, req.billing_address_id).await?;
        }

        let cart = self.cart_repository.get_or_create_cart(user_id).await?;
        let items = self.cart_repository.list_items(cart.cart_id).await?;

        if items.is_empty() {
            return Err(ServiceError::EmptyCart);
        }

        // Early shortfall check for a friendly error; the transaction below
        // re-verifies with conditional decrements, so this is not the
        // authoritative one.
        for item in &items {
            if item.stock_quantity < item.quantity {
                return Err(ServiceError::InsufficientStock {
                    product: item.product_name.clone(),
                    available: item.stock_quantity,
                });
            }
        }

        let total_amount_cents: i64 = items
            .iter()
            .map(|item| item.unit_price_cents * item.quantity as i64)
            .sum();

        let record = CreateOrderRecordRequest {
            user_id,
            cart_id: cart.cart_id,
            shipping_address_id: req.shipping_address_id,
            billing_address_id: req.billing_address_id,
            total_amount_cents,
            items: items
                .iter()
                .map(|item| CreateOrderItemRecordRequest {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                })
                .collect(),
        };

        let (order, order_items) =
            self.command
                .create_order(&record)
                .await
                .map_err(|err| match err {
                    RepositoryError::InsufficientStock {
                        product_id,
                        available,
                    } => ServiceError::InsufficientStock {
                        product: Self::product_name(&items, product_id),
                        available,
                    },
                    other => other.into(),
                })?;

        info!(
            "✅ User {} placed order {} for {} cents",
            user_id, order.order_number, order.total_amount_cents
        );

        Ok(ApiResponse::success(
            "Order placed",
            OrderDetailResponse::new(order, order_items),
        ))
    }

    async fn update_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or(ServiceError::OrderNotFound)?;

        let current: OrderStatus = order.status.parse().map_err(ServiceError::Internal)?;

        if !current.can_transition_to(req.status) {
            return Err(ServiceError::Validation(vec![format!(
                "cannot move order from {current} to {}",
                req.status
            )]));
        }

        let updated = self
            .command
            .update_status(order_id, req.status)
            .await?
            .ok_or(ServiceError::OrderNotFound)?;

        Ok(ApiResponse::success(
            "Order status updated",
            OrderResponse::from(updated),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            AddressRepositoryTrait, CartRepositoryTrait, OrderCommandRepositoryTrait,
            OrderQueryRepositoryTrait,
        },
        domain::requests::{
            address::{CreateAddressRequest, UpdateAddressRequest},
            order::FindAllOrders,
        },
        model::{
            address::Address,
            cart::{Cart, CartItem},
            order::Order,
            order_item::OrderItem,
        },
        utils::generate_order_number,
    };
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    struct FakeProduct {
        name: String,
        price_cents: i64,
        stock: i32,
    }

    /// In-memory storage shared by all the fake repositories. Carts are keyed
    /// by user id and the cart id equals the user id.
    #[derive(Default)]
    struct FakeStore {
        addresses: Mutex<Vec<(i32, i32)>>,
        products: Mutex<HashMap<i32, FakeProduct>>,
        carts: Mutex<HashMap<i32, Vec<(i32, i32)>>>,
        orders: Mutex<Vec<Order>>,
        order_items: Mutex<Vec<OrderItem>>,
    }

    impl FakeStore {
        fn with_address(self: &Arc<Self>, user_id: i32, address_id: i32) -> &Arc<Self> {
            self.addresses.lock().unwrap().push((user_id, address_id));
            self
        }

        fn with_product(self: &Arc<Self>, id: i32, name: &str, price_cents: i64, stock: i32) {
            self.products.lock().unwrap().insert(
                id,
                FakeProduct {
                    name: name.into(),
                    price_cents,
                    stock,
                },
            );
        }

        fn with_cart_line(self: &Arc<Self>, user_id: i32, product_id: i32, quantity: i32) {
            self.carts
                .lock()
                .unwrap()
                .entry(user_id)
                .or_default()
                .push((product_id, quantity));
        }

        fn stock_of(&self, product_id: i32) -> i32 {
            self.products.lock().unwrap()[&product_id].stock
        }

        fn address(address_id: i32, user_id: i32) -> Address {
            Address {
                address_id,
                user_id,
                label: "home".into(),
                street: None,
                city: None,
                state: None,
                postal_code: None,
                country: None,
                is_default: false,
            }
        }
    }

    #[async_trait]
    impl AddressRepositoryTrait for FakeStore {
        async fn create_address(
            &self,
            user_id: i32,
            _req: &CreateAddressRequest,
        ) -> Result<Address, RepositoryError> {
            let address_id = self.addresses.lock().unwrap().len() as i32 + 1;
            self.addresses.lock().unwrap().push((user_id, address_id));
            Ok(Self::address(address_id, user_id))
        }

        async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<Address>, RepositoryError> {
            Ok(self
                .addresses
                .lock()
                .unwrap()
                .iter()
                .filter(|(owner, _)| *owner == user_id)
                .map(|(owner, id)| Self::address(*id, *owner))
                .collect())
        }

        async fn find_by_id_for_user(
            &self,
            user_id: i32,
            address_id: i32,
        ) -> Result<Option<Address>, RepositoryError> {
            let found = self
                .addresses
                .lock()
                .unwrap()
                .iter()
                .any(|&(owner, id)| owner == user_id && id == address_id);
            Ok(found.then(|| Self::address(address_id, user_id)))
        }

        async fn update_address(
            &self,
            _user_id: i32,
            _address_id: i32,
            _req: &UpdateAddressRequest,
        ) -> Result<Option<Address>, RepositoryError> {
            Ok(None)
        }

        async fn delete_address(
            &self,
            _user_id: i32,
            _address_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[async_trait]
    impl CartRepositoryTrait for FakeStore {
        async fn get_or_create_cart(&self, user_id: i32) -> Result<Cart, RepositoryError> {
            self.carts.lock().unwrap().entry(user_id).or_default();
            Ok(Cart {
                cart_id: user_id,
                user_id,
                created_at: None,
                updated_at: None,
            })
        }

        async fn list_items(&self, cart_id: i32) -> Result<Vec<CartItemDetail>, RepositoryError> {
            let carts = self.carts.lock().unwrap();
            let products = self.products.lock().unwrap();
            let lines = carts.get(&cart_id).cloned().unwrap_or_default();

            Ok(lines
                .iter()
                .enumerate()
                .map(|(i, &(product_id, quantity))| {
                    let product = &products[&product_id];
                    CartItemDetail {
                        cart_item_id: i as i32 + 1,
                        cart_id,
                        product_id,
                        product_name: product.name.clone(),
                        unit_price_cents: product.price_cents,
                        stock_quantity: product.stock,
                        quantity,
                    }
                })
                .collect())
        }

        async fn add_item(
            &self,
            cart_id: i32,
            product_id: i32,
            quantity: i32,
        ) -> Result<CartItem, RepositoryError> {
            self.carts
                .lock()
                .unwrap()
                .entry(cart_id)
                .or_default()
                .push((product_id, quantity));
            Ok(CartItem {
                cart_item_id: 1,
                cart_id,
                product_id,
                quantity,
                added_at: None,
            })
        }

        async fn update_item(
            &self,
            _cart_id: i32,
            _cart_item_id: i32,
            _quantity: i32,
        ) -> Result<Option<CartItem>, RepositoryError> {
            Ok(None)
        }

        async fn remove_item(
            &self,
            _cart_id: i32,
            _cart_item_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for FakeStore {
        async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .filter(|o| o.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.order_id == order_id)
                .cloned())
        }

        async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(self
                .order_items
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.order_id == order_id)
                .cloned()
                .collect())
        }

        async fn find_all(
            &self,
            _req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            let orders = self.orders.lock().unwrap().clone();
            let total = orders.len() as i64;
            Ok((orders, total))
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FakeStore {
        /// Mirrors the SQL transaction: the stock check and decrement happen
        /// under one lock, so two concurrent placements cannot both take the
        /// last unit, and a shortfall leaves every count untouched.
        async fn create_order(
            &self,
            req: &CreateOrderRecordRequest,
        ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
            let mut products = self.products.lock().unwrap();

            for item in &req.items {
                let product = products.get(&item.product_id).ok_or_else(|| {
                    RepositoryError::NotFound(format!("product {}", item.product_id))
                })?;
                if product.stock < item.quantity {
                    return Err(RepositoryError::InsufficientStock {
                        product_id: item.product_id,
                        available: product.stock,
                    });
                }
            }

            for item in &req.items {
                if let Some(product) = products.get_mut(&item.product_id) {
                    product.stock -= item.quantity;
                }
            }

            let mut orders = self.orders.lock().unwrap();
            let order = Order {
                order_id: orders.len() as i32 + 1,
                user_id: req.user_id,
                shipping_address_id: req.shipping_address_id,
                billing_address_id: req.billing_address_id,
                order_number: generate_order_number().unwrap(),
                total_amount_cents: req.total_amount_cents,
                status: "pending".into(),
                order_date: None,
                shipped_at: None,
            };
            orders.push(order.clone());

            let mut order_items = self.order_items.lock().unwrap();
            let items: Vec<OrderItem> = req
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| OrderItem {
                    order_item_id: order_items.len() as i32 + i as i32 + 1,
                    order_id: order.order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                })
                .collect();
            order_items.extend(items.iter().cloned());

            self.carts.lock().unwrap().remove(&req.cart_id);

            Ok((order, items))
        }

        async fn update_status(
            &self,
            order_id: i32,
            status: OrderStatus,
        ) -> Result<Option<Order>, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            Ok(orders.iter_mut().find(|o| o.order_id == order_id).map(|o| {
                o.status = status.as_str().into();
                o.clone()
            }))
        }
    }

    fn service_over(store: Arc<FakeStore>) -> OrderCommandService {
        OrderCommandService::new(store.clone(), store.clone(), store.clone(), store)
    }

    fn place_req(address_id: i32) -> PlaceOrderRequest {
        PlaceOrderRequest {
            shipping_address_id: address_id,
            billing_address_id: address_id,
        }
    }

    #[tokio::test]
    async fn places_order_and_clears_cart() {
        let store = Arc::new(FakeStore::default());
        store.with_address(1, 10);
        store.with_product(100, "Mechanical Keyboard", 8_000, 5);
        store.with_product(101, "USB-C Hub", 3_500, 3);
        store.with_cart_line(1, 100, 2);
        store.with_cart_line(1, 101, 1);
        let service = service_over(store.clone());

        let res = service.place_order(1, &place_req(10)).await.unwrap();

        assert_eq!(res.data.order.total_amount_cents, 2 * 8_000 + 3_500);
        assert_eq!(res.data.order.status, "pending");
        assert_eq!(res.data.items.len(), 2);
        assert!(res.data.order.order_number.starts_with("ORD-"));

        assert_eq!(store.stock_of(100), 3);
        assert_eq!(store.stock_of(101), 2);
        assert!(store.carts.lock().unwrap().get(&1).is_none());
    }

    #[tokio::test]
    async fn rejects_foreign_address() {
        let store = Arc::new(FakeStore::default());
        store.with_address(2, 10); // belongs to another user
        store.with_product(100, "Mechanical Keyboard", 8_000, 5);
        store.with_cart_line(1, 100, 1);
        let service = service_over(store);

        let err = service.place_order(1, &place_req(10)).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidAddress));
    }

    #[tokio::test]
    async fn rejects_empty_cart() {
        let store = Arc::new(FakeStore::default());
        store.with_address(1, 10);
        let service = service_over(store);

        let err = service.place_order(1, &place_req(10)).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyCart));
    }

    #[tokio::test]
    async fn reports_shortfall_with_product_and_availability() {
        let store = Arc::new(FakeStore::default());
        store.with_address(1, 10);
        store.with_product(100, "Mechanical Keyboard", 8_000, 1);
        store.with_cart_line(1, 100, 3);
        let service = service_over(store.clone());

        let err = service.place_order(1, &place_req(10)).await.unwrap_err();
        match err {
            ServiceError::InsufficientStock { product, available } => {
                assert_eq!(product, "Mechanical Keyboard");
                assert_eq!(available, 1);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        // Nothing was decremented and the cart survives a failed checkout.
        assert_eq!(store.stock_of(100), 1);
        assert!(store.carts.lock().unwrap().get(&1).is_some());
    }

    #[tokio::test]
    async fn concurrent_buyers_cannot_oversell_the_last_unit() {
        let store = Arc::new(FakeStore::default());
        store.with_address(1, 10);
        store.with_address(2, 20);
        store.with_product(100, "Mechanical Keyboard", 8_000, 1);
        store.with_cart_line(1, 100, 1);
        store.with_cart_line(2, 100, 1);
        let service = service_over(store.clone());

        let first = tokio::spawn({
            let service = service.clone();
            async move { service.place_order(1, &place_req(10)).await }
        });
        let second = tokio::spawn({
            let service = service.clone();
            async move { service.place_order(2, &place_req(20)).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];
        let won = results.iter().filter(|r| r.is_ok()).count();
        let lost = results
            .iter()
            .filter(|r| {
                matches!(
                    r,
                    Err(ServiceError::InsufficientStock { available: 0, .. })
                )
            })
            .count();

        assert_eq!(won, 1);
        assert_eq!(lost, 1);
        assert_eq!(store.stock_of(100), 0);
    }

    #[tokio::test]
    async fn valid_status_transition_is_applied() {
        let store = Arc::new(FakeStore::default());
        store.with_address(1, 10);
        store.with_product(100, "Mechanical Keyboard", 8_000, 5);
        store.with_cart_line(1, 100, 1);
        let service = service_over(store);

        let placed = service.place_order(1, &place_req(10)).await.unwrap();
        let order_id = placed.data.order.id;

        let res = service
            .update_status(
                order_id,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::Paid,
                },
            )
            .await
            .unwrap();

        assert_eq!(res.data.status, "paid");
    }

    #[tokio::test]
    async fn backwards_status_transition_is_rejected() {
        let store = Arc::new(FakeStore::default());
        store.with_address(1, 10);
        store.with_product(100, "Mechanical Keyboard", 8_000, 5);
        store.with_cart_line(1, 100, 1);
        let service = service_over(store);

        let placed = service.place_order(1, &place_req(10)).await.unwrap();
        let order_id = placed.data.order.id;

        let err = service
            .update_status(
                order_id,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::Delivered,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_order_is_order_not_found() {
        let store = Arc::new(FakeStore::default());
        let service = service_over(store);

        let err = service
            .update_status(
                999,
                &UpdateOrderStatusRequest {
                    status: OrderStatus::Paid,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::OrderNotFound));
    }
}
