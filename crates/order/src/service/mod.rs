mod placement;
mod reservation;

pub use self::placement::{OrderPlacementService, OrderPlacementServiceDeps};
pub use self::reservation::StockReservationEngine;
