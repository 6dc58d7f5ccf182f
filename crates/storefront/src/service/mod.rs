mod address;
mod admin;
mod auth;
mod cart;
mod category;
mod order;
mod product;
mod review;
mod user;

pub use self::address::AddressService;
pub use self::admin::DashboardService;
pub use self::auth::AuthService;
pub use self::cart::CartService;
pub use self::category::CategoryService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::review::ReviewService;
pub use self::user::UserService;
