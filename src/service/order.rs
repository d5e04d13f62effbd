//! Order service: CRUD and lookups over an [`OrderRepository`]

use crate::core::{
    CustomerRepository, EntityError, OrderDto, OrderItemDto, OrderMapper, OrderRepository,
    ServiceError, ServiceResult, StorageError, ValidationError,
};
use crate::entities::Order;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Orchestrates repository and mapper calls for orders.
///
/// Identifiers are `Option<i64>` at this boundary: an absent id is rejected
/// with [`ValidationError::MissingId`] before the store is touched.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
}

fn require_id(id: Option<i64>) -> ServiceResult<i64> {
    id.ok_or_else(|| ValidationError::MissingId.into())
}

fn missing(err: EntityError) -> ServiceError {
    tracing::warn!(error = %err, "Record not found");
    err.into()
}

fn to_dtos(orders: &[Order]) -> Vec<OrderDto> {
    orders.iter().map(OrderMapper::order_to_dto).collect()
}

impl OrderService {
    pub fn new(
        orders: impl OrderRepository + 'static,
        customers: impl CustomerRepository + 'static,
    ) -> Self {
        Self {
            orders: Arc::new(orders),
            customers: Arc::new(customers),
        }
    }

    pub fn from_shared(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self { orders, customers }
    }

    /// Wrap this service in the catch-log-swallow facade
    pub fn lenient(&self) -> super::LenientOrderService {
        super::LenientOrderService::new(self.clone())
    }

    pub async fn get_all_orders(&self) -> ServiceResult<Vec<OrderDto>> {
        let orders = self
            .orders
            .find_all()
            .await
            .map_err(|e| StorageError::query("find_all", e))?;

        Ok(to_dtos(&orders))
    }

    /// `Ok(None)` when no order has this id
    pub async fn get_order_by_id(&self, id: Option<i64>) -> ServiceResult<Option<OrderDto>> {
        let id = require_id(id)?;
        tracing::debug!(order_id = id, "Getting order");

        let order = self
            .orders
            .find_by_id(id)
            .await
            .map_err(|e| StorageError::query("find_by_id", e))?;

        Ok(order.as_ref().map(OrderMapper::order_to_dto))
    }

    pub async fn create_order(&self, dto: OrderDto) -> ServiceResult<OrderDto> {
        if let Some(id) = dto.id {
            return Err(ValidationError::IdAlreadyAssigned { id }.into());
        }

        let order = OrderMapper::dto_to_order(dto, self.customers.as_ref()).await?;
        let saved = self
            .orders
            .save(order)
            .await
            .map_err(|e| StorageError::query("save", e))?;

        tracing::info!(order_id = ?saved.id, customer_id = ?saved.customer_id(), "Order created");
        Ok(OrderMapper::order_to_dto(&saved))
    }

    /// Merge the fields present in `dto` into the stored order.
    ///
    /// Never creates: an unknown id is [`EntityError::NotFound`].
    pub async fn update_order(&self, id: Option<i64>, dto: OrderDto) -> ServiceResult<OrderDto> {
        let id = require_id(id)?;

        let mut stored = self
            .orders
            .find_by_id(id)
            .await
            .map_err(|e| StorageError::query("find_by_id", e))?
            .ok_or_else(|| missing(EntityError::order_not_found(id)))?;

        let changes = OrderMapper::dto_to_changes(dto, self.customers.as_ref()).await?;
        stored.update_only_necessary(changes);

        let saved = self
            .orders
            .save(stored)
            .await
            .map_err(|e| StorageError::query("save", e))?;

        tracing::info!(order_id = id, "Order updated");
        Ok(OrderMapper::order_to_dto(&saved))
    }

    pub async fn delete_order(&self, id: Option<i64>) -> ServiceResult<()> {
        let id = require_id(id)?;

        self.orders
            .delete_by_id(id)
            .await
            .map_err(|e| StorageError::query("delete_by_id", e))?;

        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }

    /// Orders dated within `[from, to]`
    pub async fn find_by_date(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ServiceResult<Vec<OrderDto>> {
        tracing::debug!(%from, %to, "Finding orders by date");

        let orders = self
            .orders
            .find_by_date_between(from, to)
            .await
            .map_err(|e| StorageError::query("find_by_date_between", e))?
            .unwrap_or_default();

        Ok(to_dtos(&orders))
    }

    /// Orders of a customer; an unknown customer is [`EntityError::NotFound`]
    pub async fn find_all_order_by_customer_id(
        &self,
        id: Option<i64>,
    ) -> ServiceResult<Vec<OrderDto>> {
        let id = require_id(id)?;

        let orders = self
            .orders
            .find_all_order_by_customer_id(id)
            .await
            .map_err(|e| StorageError::query("find_all_order_by_customer_id", e))?
            .ok_or_else(|| missing(EntityError::customer_not_found(id)))?;

        Ok(to_dtos(&orders))
    }

    /// Orders of a customer in `status`. Inputs are passed to the store as-is.
    pub async fn find_by_customer_and_status(
        &self,
        customer_id: Option<i64>,
        status: Option<&str>,
    ) -> ServiceResult<Vec<OrderDto>> {
        let orders = self
            .orders
            .find_by_customer_and_status(customer_id, status)
            .await
            .map_err(|e| StorageError::query("find_by_customer_and_status", e))?
            .unwrap_or_default();

        Ok(to_dtos(&orders))
    }

    /// Line items of an order, loaded with the order in one query
    pub async fn find_by_id_with_order_items(
        &self,
        id: Option<i64>,
    ) -> ServiceResult<Vec<OrderItemDto>> {
        let id = require_id(id)?;

        let items = self
            .orders
            .find_by_id_with_order_items(id)
            .await
            .map_err(|e| StorageError::query("find_by_id_with_order_items", e))?
            .ok_or_else(|| missing(EntityError::order_not_found(id)))?;

        Ok(items.iter().map(OrderMapper::order_item_to_dto).collect())
    }
}
