//! Router builder for order routes

use super::handlers::{
    AppState, create_order, delete_order, find_orders_by_date, get_order, health_check,
    list_customer_orders, list_order_items, list_orders, update_order,
};
use crate::core::Entity;
use crate::entities::{Customer, Order};
use axum::{Router, routing::get};

/// Build the order REST routes
///
/// - GET /health - Health check
/// - GET, POST /orders - List or create orders
/// - GET, PUT, DELETE /orders/{id} - Read, merge-update or delete an order
/// - GET /orders/{id}/items - Line items of an order
/// - GET /orders/search/date?from=..&to=.. - Orders within a date range
/// - GET /customers/{customer_id}/orders[?status=..] - Orders of a customer
pub fn build_order_routes(state: AppState) -> Router {
    let orders = format!("/{}", Order::resource_name());
    let customers = format!("/{}", Customer::resource_name());

    Router::new()
        .route("/health", get(health_check))
        .route(&orders, get(list_orders).post(create_order))
        .route(&format!("{}/search/date", orders), get(find_orders_by_date))
        .route(
            &format!("{}/{{id}}", orders),
            get(get_order).put(update_order).delete(delete_order),
        )
        .route(&format!("{}/{{id}}/items", orders), get(list_order_items))
        .route(
            &format!("{}/{{customer_id}}/{}", customers, Order::resource_name()),
            get(list_customer_orders),
        )
        .with_state(state)
}
