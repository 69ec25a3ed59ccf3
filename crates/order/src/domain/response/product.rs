use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of a product that is embedded in each order line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
}
