mod address;
mod admin;
mod auth;
mod cart;
mod category;
mod order;
mod product;
mod review;
mod user;

pub use self::address::{
    AddressRepositoryTrait, AddressServiceTrait, DynAddressRepository, DynAddressService,
};
pub use self::admin::{
    AdminStatsRepositoryTrait, DashboardServiceTrait, DynAdminStatsRepository, DynDashboardService,
};
pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::category::{
    CategoryRepositoryTrait, CategoryServiceTrait, DynCategoryRepository, DynCategoryService,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::review::{
    DynReviewRepository, DynReviewService, ReviewRepositoryTrait, ReviewServiceTrait,
};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
