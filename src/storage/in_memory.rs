//! In-memory repositories for testing and development

use crate::core::{CustomerRepository, Entity, OrderRepository};
use crate::entities::{Customer, Order, OrderItem};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Rows of one table plus the sequence that assigns their ids
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Keep the sequence ahead of ids chosen by the caller
    fn observe_id(&mut self, id: i64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

/// In-memory customer repository
///
/// Uses RwLock for thread-safe access. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Table<Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn exists(&self, id: i64) -> Result<bool> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers.rows.contains_key(&id))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers.rows.get(&id).cloned())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match customer.id() {
            Some(id) => {
                customers.observe_id(id);
                id
            }
            None => customers.next_id(),
        };
        customer.assign_id(id);
        customers.rows.insert(id, customer.clone());

        Ok(customer)
    }
}

#[derive(Debug, Default)]
struct OrderTables {
    orders: Table<Order>,
    item_seq: Table<()>,
}

/// In-memory order repository
///
/// Holds a handle to the customer repository so customer-scoped queries can
/// tell an unknown customer from a customer without orders.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    tables: Arc<RwLock<OrderTables>>,
    customers: InMemoryCustomerRepository,
}

impl InMemoryOrderRepository {
    /// Create an order repository with its own, empty customer repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order repository sharing `customers`
    pub fn with_customers(customers: InMemoryCustomerRepository) -> Self {
        Self {
            tables: Arc::default(),
            customers,
        }
    }

    /// The customer repository backing this order repository
    pub fn customers(&self) -> &InMemoryCustomerRepository {
        &self.customers
    }

    fn select<F>(&self, predicate: F) -> Result<Vec<Order>>
    where
        F: Fn(&Order) -> bool,
    {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables
            .orders
            .rows
            .values()
            .filter(|order| predicate(order))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>> {
        self.select(|_| true)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.orders.rows.get(&id).cloned())
    }

    async fn save(&self, mut order: Order) -> Result<Order> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match order.id() {
            Some(id) => {
                tables.orders.observe_id(id);
                id
            }
            None => tables.orders.next_id(),
        };
        order.assign_id(id);

        // Only ids the stored order already owns survive; anything else gets
        // a fresh id
        let mut owned: Vec<i64> = tables
            .orders
            .rows
            .get(&id)
            .map(|stored| stored.items.iter().filter_map(|item| item.id).collect())
            .unwrap_or_default();

        for item in &mut order.items {
            let kept = item.id().and_then(|item_id| {
                let at = owned.iter().position(|owned_id| *owned_id == item_id)?;
                Some(owned.swap_remove(at))
            });
            let item_id = match kept {
                Some(item_id) => item_id,
                None => tables.item_seq.next_id(),
            };
            item.assign_id(item_id);
        }
        order.bind_items();

        tables.orders.rows.insert(id, order.clone());

        Ok(order)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        tables.orders.rows.remove(&id);

        Ok(())
    }

    async fn find_by_date_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Option<Vec<Order>>> {
        self.select(|order| order.order_date >= from && order.order_date <= to)
            .map(Some)
    }

    async fn find_all_order_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Option<Vec<Order>>> {
        if !self.customers.exists(customer_id)? {
            return Ok(None);
        }

        self.select(|order| order.customer_id() == Some(customer_id))
            .map(Some)
    }

    async fn find_by_customer_and_status(
        &self,
        customer_id: Option<i64>,
        status: Option<&str>,
    ) -> Result<Option<Vec<Order>>> {
        let (Some(customer_id), Some(status)) = (customer_id, status) else {
            return Ok(Some(Vec::new()));
        };

        self.select(|order| order.customer_id() == Some(customer_id) && order.status == status)
            .map(Some)
    }

    async fn find_by_id_with_order_items(&self, id: i64) -> Result<Option<Vec<OrderItem>>> {
        Ok(self.find_by_id(id).await?.map(|order| order.items))
    }
}
