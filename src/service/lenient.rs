//! Catch-log-swallow facade over [`OrderService`]
//!
//! Every failure is logged with `tracing::error!` and replaced by an empty
//! value: an empty `Vec`, `None`, or `false`. Callers of this facade cannot
//! tell "no results" from "an error occurred"; use [`OrderService`] directly
//! when that distinction matters.

use super::OrderService;
use crate::core::{OrderDto, OrderItemDto, ServiceResult};
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct LenientOrderService {
    inner: OrderService,
}

/// Log `result`'s error under `context` and fall back to `default`
fn swallow<T>(result: ServiceResult<T>, context: &str, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "{}", context);
            default
        }
    }
}

impl LenientOrderService {
    pub fn new(inner: OrderService) -> Self {
        Self { inner }
    }

    pub async fn get_all_orders(&self) -> Vec<OrderDto> {
        swallow(
            self.inner.get_all_orders().await,
            "Error getting all orders",
            Vec::new(),
        )
    }

    pub async fn get_order_by_id(&self, id: Option<i64>) -> Option<OrderDto> {
        swallow(
            self.inner.get_order_by_id(id).await,
            "Error getting order by id",
            None,
        )
    }

    pub async fn create_order(&self, dto: OrderDto) -> Option<OrderDto> {
        swallow(
            self.inner.create_order(dto).await.map(Some),
            "Error creating order",
            None,
        )
    }

    pub async fn update_order(&self, id: Option<i64>, dto: OrderDto) -> Option<OrderDto> {
        swallow(
            self.inner.update_order(id, dto).await.map(Some),
            "Error updating order",
            None,
        )
    }

    pub async fn delete_order(&self, id: Option<i64>) -> bool {
        swallow(
            self.inner.delete_order(id).await.map(|()| true),
            "Error deleting order",
            false,
        )
    }

    pub async fn find_by_date(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<OrderDto> {
        swallow(
            self.inner.find_by_date(from, to).await,
            "Error getting orders by date",
            Vec::new(),
        )
    }

    pub async fn find_all_order_by_customer_id(&self, id: Option<i64>) -> Vec<OrderDto> {
        swallow(
            self.inner.find_all_order_by_customer_id(id).await,
            "Error getting orders by customer",
            Vec::new(),
        )
    }

    pub async fn find_by_customer_and_status(
        &self,
        customer_id: Option<i64>,
        status: Option<&str>,
    ) -> Vec<OrderDto> {
        swallow(
            self.inner
                .find_by_customer_and_status(customer_id, status)
                .await,
            "Error getting orders by customer and status",
            Vec::new(),
        )
    }

    pub async fn find_by_id_with_order_items(&self, id: Option<i64>) -> Vec<OrderItemDto> {
        swallow(
            self.inner.find_by_id_with_order_items(id).await,
            "Error getting order by id with order items",
            Vec::new(),
        )
    }
}
