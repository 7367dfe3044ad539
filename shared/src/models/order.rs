//! Order Model

use super::food_item::FoodItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays on delivery
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
}

impl PaymentMethod {
    /// Wire/storage value (`CASH` / `CARD`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Card => "CARD",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Grand total in so'm
    pub total_price: i64,
    pub payment_method: PaymentMethod,
    pub customer_name: Option<String>,
    pub customer_phone: String,
    pub customer_address: Option<String>,
    pub created_at: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// One line of a placed order
///
/// Names and unit price are captured when the order is placed, so the line
/// stays readable after the food item is edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    /// `None` once the referenced food item has been deleted
    pub item_id: Option<i64>,
    pub quantity: i64,
    /// Unit price at order time
    pub price: i64,
    pub name: String,
    pub name_uz: String,
    pub name_ru: String,

    /// Current catalog entry, when it still exists
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub item: Option<FoodItem>,
}

impl OrderLine {
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// Line of an order submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub item_id: i64,
    pub quantity: i64,
    /// Unit price the customer saw
    pub price: i64,
}

/// Order submission payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineInput>,
    pub total_price: i64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: Option<String>,
}

impl CreateOrderRequest {
    /// Σ price × quantity over the submitted lines
    ///
    /// `None` on overflow.
    pub fn computed_total(&self) -> Option<i64> {
        self.items.iter().try_fold(0i64, |acc, line| {
            line.price
                .checked_mul(line.quantity)
                .and_then(|sub| acc.checked_add(sub))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: i64, quantity: i64, price: i64) -> OrderLineInput {
        OrderLineInput {
            item_id,
            quantity,
            price,
        }
    }

    #[test]
    fn payment_method_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Card).unwrap(),
            "\"CARD\""
        );
        let m: PaymentMethod = serde_json::from_str("\"CASH\"").unwrap();
        assert_eq!(m, PaymentMethod::Cash);
        assert!(serde_json::from_str::<PaymentMethod>("\"CRYPTO\"").is_err());
    }

    #[test]
    fn computed_total_sums_lines() {
        let req = CreateOrderRequest {
            items: vec![line(1, 2, 8000), line(2, 1, 12000)],
            total_price: 28000,
            payment_method: PaymentMethod::Cash,
            customer_name: None,
            customer_phone: "+998901234567".into(),
            customer_address: None,
        };
        assert_eq!(req.computed_total(), Some(28000));
    }

    #[test]
    fn computed_total_overflow_is_none() {
        let req = CreateOrderRequest {
            items: vec![line(1, 2, i64::MAX)],
            total_price: 0,
            payment_method: PaymentMethod::Card,
            customer_name: None,
            customer_phone: "1".into(),
            customer_address: None,
        };
        assert_eq!(req.computed_total(), None);
    }

    #[test]
    fn payment_method_defaults_to_cash() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"items":[{"item_id":1,"quantity":1,"price":5000}],"total_price":5000,"customer_phone":"1"}"#,
        )
        .unwrap();
        assert_eq!(req.payment_method, PaymentMethod::Cash);
    }
}
