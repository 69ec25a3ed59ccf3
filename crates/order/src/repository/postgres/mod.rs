mod order;
mod order_item;
mod product;
mod store;
mod unit_of_work;

pub use self::store::PgOrderStore;
pub use self::unit_of_work::PgUnitOfWork;
