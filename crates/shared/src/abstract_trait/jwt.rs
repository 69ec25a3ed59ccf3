use crate::{domain::AuthenticatedBuyer, errors::ServiceError};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn verify_token(
        &self,
        token: &str,
        expected_type: &str,
    ) -> Result<AuthenticatedBuyer, ServiceError>;
}
