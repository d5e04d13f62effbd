//! Transfer objects exchanged at the service boundary

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat, serializable projection of an [`Order`](crate::entities::Order).
///
/// Every field is optional: on create the id must be absent, on update only
/// the fields that are present are applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemDto>>,
}

impl OrderDto {
    /// A new order for `customer_id`, ready to be created
    pub fn new(customer_id: i64, status: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id),
            status: Some(status.into()),
            ..Default::default()
        }
    }

    pub fn with_order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = Some(order_date);
        self
    }

    pub fn with_items(mut self, items: Vec<OrderItemDto>) -> Self {
        self.items = Some(items);
        self
    }

    /// A DTO that only changes the status
    pub fn status_change(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }
}

/// Flat, serializable projection of an [`OrderItem`](crate::entities::OrderItem)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItemDto {
    pub fn new(product_id: i64, quantity: i32, price: Decimal) -> Self {
        Self {
            id: None,
            order_id: None,
            product_id,
            quantity,
            price,
        }
    }
}
