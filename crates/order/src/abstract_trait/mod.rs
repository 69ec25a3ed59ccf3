pub mod order;
pub mod order_item;
pub mod product;
pub mod reservation;
pub mod store;
