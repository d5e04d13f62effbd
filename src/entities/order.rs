//! Order entity and its partial-update merge

use super::{Customer, OrderItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer order with the line items it owns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<i64>,
    pub customer: Customer,
    pub status: String,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

crate::impl_entity!(Order, "orders", "order");

/// Detached, partial order used to update a persisted one.
///
/// `None` means "leave the persisted value as it is".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderChanges {
    pub customer: Option<Customer>,
    pub status: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
    pub items: Option<Vec<OrderItem>>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.customer.is_none()
            && self.status.is_none()
            && self.order_date.is_none()
            && self.items.is_none()
    }
}

impl Order {
    pub fn new(customer: Customer, status: impl Into<String>, order_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            customer,
            status: status.into(),
            order_date,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = items;
        self.bind_items();
        self
    }

    /// Customer id, if the referenced customer has been persisted
    pub fn customer_id(&self) -> Option<i64> {
        self.customer.id
    }

    /// Sum of all line totals
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Merge the fields present in `changes` into this order.
    ///
    /// Absent fields keep their persisted value. Items are replaced as a
    /// whole when present and re-bound to this order. The id never changes.
    pub fn update_only_necessary(&mut self, changes: OrderChanges) {
        if let Some(customer) = changes.customer {
            self.customer = customer;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(order_date) = changes.order_date {
            self.order_date = order_date;
        }
        if let Some(items) = changes.items {
            self.items = items;
            self.bind_items();
        }
    }

    /// Point every item's back-reference at this order
    pub fn bind_items(&mut self) {
        for item in &mut self.items {
            item.order_id = self.id;
        }
    }
}
