pub mod address;
pub mod cart;
pub mod category;
pub mod order;
pub mod order_item;
pub mod product;
pub mod review;
pub mod user;
