mod identity;

pub use self::identity::{AuthenticatedBuyer, BUYER_ROLE};
