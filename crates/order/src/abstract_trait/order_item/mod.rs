mod repository;

pub use self::repository::OrderItemTxRepositoryTrait;
