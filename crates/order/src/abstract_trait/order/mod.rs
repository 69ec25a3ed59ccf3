mod repository;
mod service;

pub use self::repository::OrderTxRepositoryTrait;
pub use self::service::{DynOrderPlacementService, OrderPlacementServiceTrait};
