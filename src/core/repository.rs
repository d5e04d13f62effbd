//! Repository traits for orders and customers
//!
//! Implementations execute queries against a store. The service layer is
//! agnostic to the underlying storage mechanism.

use crate::entities::{Customer, Order, OrderItem};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Query and persist operations over orders.
///
/// Methods returning `Result<Option<Vec<_>>>` distinguish "absent" (`None`)
/// from "found, but empty" (`Some(vec![])`).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List every order
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Get an order (with its items) by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    /// Insert when the order has no id, otherwise overwrite the stored one.
    ///
    /// Returns the persisted order with store-assigned ids on the order and
    /// its items.
    async fn save(&self, order: Order) -> Result<Order>;

    /// Delete an order and its items
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Orders whose date lies in `[from, to]`
    async fn find_by_date_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Option<Vec<Order>>>;

    /// Orders of a customer; `None` when the customer does not exist
    async fn find_all_order_by_customer_id(&self, customer_id: i64)
    -> Result<Option<Vec<Order>>>;

    /// Orders of a customer in a given status.
    ///
    /// Absent arguments match nothing.
    async fn find_by_customer_and_status(
        &self,
        customer_id: Option<i64>,
        status: Option<&str>,
    ) -> Result<Option<Vec<Order>>>;

    /// Line items of an order; `None` when the order does not exist
    async fn find_by_id_with_order_items(&self, id: i64) -> Result<Option<Vec<OrderItem>>>;
}

/// Customer lookup capability, injected into the order mapper
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    async fn save(&self, customer: Customer) -> Result<Customer>;
}
