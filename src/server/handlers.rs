//! HTTP handlers for order operations
//!
//! Handlers call [`OrderService`] and let [`ServiceError`] pick the status
//! code, so clients can tell a missing order (404) from a failure (500).

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

use super::extractors::{IdPath, QueryParams};
use crate::core::{EntityError, OrderDto, OrderItemDto, ServiceError};
use crate::service::OrderService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: OrderService,
}

/// Query string of the date-range search
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Optional status filter for a customer's orders
#[derive(Debug, Deserialize)]
pub struct CustomerOrdersQuery {
    #[serde(default)]
    pub status: Option<String>,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "eshop-orders"
    }))
}

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderDto>>, ServiceError> {
    state.service.get_all_orders().await.map(Json)
}

pub async fn get_order(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<OrderDto>, ServiceError> {
    state
        .service
        .get_order_by_id(Some(id))
        .await?
        .map(Json)
        .ok_or_else(|| EntityError::order_not_found(id).into())
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderDto>,
) -> Result<(StatusCode, Json<OrderDto>), ServiceError> {
    let created = state.service.create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_order(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    Json(payload): Json<OrderDto>,
) -> Result<Json<OrderDto>, ServiceError> {
    state.service.update_order(Some(id), payload).await.map(Json)
}

pub async fn delete_order(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<StatusCode, ServiceError> {
    state.service.delete_order(Some(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_order_items(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<Vec<OrderItemDto>>, ServiceError> {
    state
        .service
        .find_by_id_with_order_items(Some(id))
        .await
        .map(Json)
}

pub async fn find_orders_by_date(
    State(state): State<AppState>,
    QueryParams(range): QueryParams<DateRangeQuery>,
) -> Result<Json<Vec<OrderDto>>, ServiceError> {
    state
        .service
        .find_by_date(range.from, range.to)
        .await
        .map(Json)
}

pub async fn list_customer_orders(
    State(state): State<AppState>,
    IdPath(customer_id): IdPath<i64>,
    QueryParams(query): QueryParams<CustomerOrdersQuery>,
) -> Result<Json<Vec<OrderDto>>, ServiceError> {
    let orders = match query.status.as_deref() {
        Some(status) => {
            state
                .service
                .find_by_customer_and_status(Some(customer_id), Some(status))
                .await?
        }
        None => {
            state
                .service
                .find_all_order_by_customer_id(Some(customer_id))
                .await?
        }
    };
    Ok(Json(orders))
}
