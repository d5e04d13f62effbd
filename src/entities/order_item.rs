//! Order line item entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line of an order.
///
/// `order_id` is a back-reference only: the owning [`Order`](super::Order)
/// holds the items and they are removed together with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
}

crate::impl_entity!(OrderItem, "order_items", "order_item");

impl OrderItem {
    pub fn new(product_id: i64, quantity: i32, price: Decimal) -> Self {
        Self {
            id: None,
            order_id: None,
            product_id,
            quantity,
            price,
        }
    }

    /// Price of the whole line
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
