mod order_number;
mod slug;

pub use self::order_number::generate_order_number;
pub use self::slug::{generate_sku, slugify};
