use crate::{domain::requests::validation::collect_messages, model::order::OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Upper bound of a single line's quantity; stock is a 32-bit column.
pub const MAX_LINE_QUANTITY: i64 = i32::MAX as i64;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderRequest {
    #[validate(
        length(min = 1, message = "items must contain at least one item"),
        nested
    )]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderItemRequest {
    #[validate(custom(function = "validate_product_id"))]
    #[serde(rename = "product_id")]
    pub product_id: String,

    #[validate(range(
        min = 1,
        max = 2147483647,
        message = "quantity must be a positive integer"
    ))]
    pub quantity: i64,
}

fn validate_product_id(value: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(value).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("uuid");
        err.message = Some("product_id must be a valid UUID".into());
        err
    })
}

impl CreateOrderRequest {
    /// Validates the raw payload and converts it into typed order lines.
    /// Every field error is reported at once.
    pub fn to_lines(&self) -> Result<Vec<OrderLine>, ServiceError> {
        self.validate()
            .map_err(|errors| ServiceError::Validation(collect_messages(&errors)))?;

        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let product_id = Uuid::parse_str(&item.product_id).map_err(|_| {
                    ServiceError::Validation(vec![format!(
                        "items[{idx}].product_id: product_id must be a valid UUID"
                    )])
                })?;
                let quantity = i32::try_from(item.quantity).map_err(|_| {
                    ServiceError::Validation(vec![format!(
                        "items[{idx}].quantity: quantity must be a positive integer"
                    )])
                })?;
                Ok(OrderLine {
                    product_id,
                    quantity,
                })
            })
            .collect()
    }
}

/// A parsed `(product, quantity)` pair handed to the reservation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

impl OrderLine {
    pub fn new(product_id: Uuid, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub user_id: Uuid,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i64) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn parses_well_formed_items() {
        let id = Uuid::now_v7();
        let req = CreateOrderRequest {
            items: vec![item(&id.to_string(), 2), item(&id.to_string(), 1)],
        };

        let lines = req.to_lines().unwrap();
        assert_eq!(lines, vec![OrderLine::new(id, 2), OrderLine::new(id, 1)]);
    }

    #[test]
    fn rejects_empty_item_list() {
        let req = CreateOrderRequest { items: vec![] };

        let ServiceError::Validation(errors) = req.to_lines().unwrap_err() else {
            panic!("expected a validation error");
        };
        assert_eq!(errors, vec!["items: items must contain at least one item"]);
    }

    #[test]
    fn reports_every_bad_field() {
        let req = CreateOrderRequest {
            items: vec![
                item("not-a-uuid", 1),
                item(&Uuid::now_v7().to_string(), 0),
                item(&Uuid::now_v7().to_string(), MAX_LINE_QUANTITY + 1),
            ],
        };

        let ServiceError::Validation(errors) = req.to_lines().unwrap_err() else {
            panic!("expected a validation error");
        };
        assert_eq!(
            errors,
            vec![
                "items[0].product_id: product_id must be a valid UUID",
                "items[1].quantity: quantity must be a positive integer",
                "items[2].quantity: quantity must be a positive integer",
            ]
        );
    }

    #[test]
    fn errors_follow_item_position() {
        let req = CreateOrderRequest {
            items: (0..12)
                .map(|_| item(&Uuid::now_v7().to_string(), 0))
                .collect(),
        };

        let ServiceError::Validation(errors) = req.to_lines().unwrap_err() else {
            panic!("expected a validation error");
        };
        let expected: Vec<String> = (0..12)
            .map(|idx| format!("items[{idx}].quantity: quantity must be a positive integer"))
            .collect();
        assert_eq!(errors, expected);
    }
}
