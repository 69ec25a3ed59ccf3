use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const BUYER_ROLE: &str = "User";

/// Identity resolved from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedBuyer {
    pub id: Uuid,
    pub role: String,
}

impl AuthenticatedBuyer {
    pub fn new(id: Uuid, role: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
        }
    }

    pub fn is_buyer(&self) -> bool {
        self.role == BUYER_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_user_role_buys() {
        assert!(AuthenticatedBuyer::new(Uuid::nil(), "User").is_buyer());
        assert!(!AuthenticatedBuyer::new(Uuid::nil(), "user").is_buyer());
        assert!(!AuthenticatedBuyer::new(Uuid::nil(), "USER").is_buyer());
        assert!(!AuthenticatedBuyer::new(Uuid::nil(), "Admin").is_buyer());
    }
}
