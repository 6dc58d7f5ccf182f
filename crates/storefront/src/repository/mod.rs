pub mod address;
pub mod admin;
pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use self::address::AddressRepository;
pub use self::admin::AdminStatsRepository;
pub use self::cart::CartRepository;
pub use self::category::CategoryRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::review::ReviewRepository;
pub use self::user::UserRepository;
