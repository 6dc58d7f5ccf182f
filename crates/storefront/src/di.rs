use crate::{
    abstract_trait::{
        DynAddressService, DynAuthService, DynCartService, DynCategoryService,
        DynDashboardService, DynOrderCommandService, DynOrderQueryService,
        DynProductCommandService, DynProductQueryService, DynReviewService, DynUserRepository,
        DynUserService,
    },
    repository::{
        AddressRepository, AdminStatsRepository, CartRepository, CategoryRepository,
        OrderCommandRepository, OrderQueryRepository, ProductCommandRepository,
        ProductQueryRepository, ReviewRepository, UserRepository,
    },
    service::{
        AddressService, AuthService, CartService, CategoryService, DashboardService,
        OrderCommandService, OrderQueryService, ProductCommandService, ProductQueryService,
        ReviewService, UserService,
    },
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
};
use std::{fmt, sync::Arc};

/// Wires repositories into services once at startup; everything is shared
/// behind `Arc` trait objects from here on.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub user_repository: DynUserRepository,
    pub address_service: DynAddressService,
    pub category_service: DynCategoryService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub cart_service: DynCartService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub review_service: DynReviewService,
    pub dashboard_service: DynDashboardService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject").finish_non_exhaustive()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let user_repository: DynUserRepository = Arc::new(UserRepository::new(pool.clone()));
        let address_repository = Arc::new(AddressRepository::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepository::new(pool.clone()));
        let product_query_repository = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repository = Arc::new(ProductCommandRepository::new(pool.clone()));
        let cart_repository = Arc::new(CartRepository::new(pool.clone()));
        let order_query_repository = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repository = Arc::new(OrderCommandRepository::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepository::new(pool.clone()));
        let stats_repository = Arc::new(AdminStatsRepository::new(pool));

        let auth_service: DynAuthService =
            Arc::new(AuthService::new(user_repository.clone(), hashing, jwt));
        let user_service: DynUserService = Arc::new(UserService::new(user_repository.clone()));
        let address_service: DynAddressService =
            Arc::new(AddressService::new(address_repository.clone()));
        let category_service: DynCategoryService =
            Arc::new(CategoryService::new(category_repository));
        let product_query_service: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repository.clone()));
        let product_command_service: DynProductCommandService = Arc::new(
            ProductCommandService::new(product_query_repository.clone(), product_command_repository),
        );
        let cart_service: DynCartService = Arc::new(CartService::new(
            cart_repository.clone(),
            product_query_repository,
        ));
        let order_query_service: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repository.clone()));
        let order_command_service: DynOrderCommandService = Arc::new(OrderCommandService::new(
            address_repository,
            cart_repository,
            order_query_repository,
            order_command_repository,
        ));
        let review_service: DynReviewService = Arc::new(ReviewService::new(review_repository));
        let dashboard_service: DynDashboardService =
            Arc::new(DashboardService::new(stats_repository));

        Self {
            auth_service,
            user_service,
            user_repository,
            address_service,
            category_service,
            product_query_service,
            product_command_service,
            cart_service,
            order_query_service,
            order_command_service,
            review_service,
            dashboard_service,
        }
    }
}
