pub mod address;
pub mod api;
pub mod cart;
pub mod category;
pub mod dashboard;
pub mod order;
pub mod pagination;
pub mod product;
pub mod review;
pub mod token;
pub mod user;
