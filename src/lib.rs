//! # eshop-orders
//!
//! The order service layer of an e-commerce backend: create, read, update,
//! delete, and a handful of filtered lookups over orders and their line
//! items.
//!
//! ## Features
//!
//! - **Repository traits**: `OrderRepository` / `CustomerRepository`, with
//!   in-memory and PostgreSQL (`postgres` feature) implementations
//! - **Transfer objects**: `OrderDto` / `OrderItemDto` at the service boundary
//! - **Partial updates**: only the fields present in an update are applied
//! - **Typed errors**: callers can tell "not found" from "failed"
//! - **Lenient facade**: `LenientOrderService` logs failures and returns
//!   empty values for callers that want that contract
//! - **REST exposure**: axum routes over the service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eshop::prelude::*;
//!
//! let orders = InMemoryOrderRepository::new();
//! let customer = orders.customers().save(Customer::new("Ada", None)).await?;
//! let service = OrderService::new(orders.clone(), orders.customers().clone());
//!
//! let created = service
//!     .create_order(OrderDto::new(customer.id.unwrap(), "NEW"))
//!     .await?;
//!
//! let shipped = service
//!     .update_order(created.id, OrderDto::status_change("SHIPPED"))
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod service;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, CustomerRepository, Entity, EntityError, MappingError, OrderDto,
        OrderItemDto, OrderMapper, OrderRepository, ServiceError, ServiceResult, StorageError,
        ValidationError,
    };

    // === Entities ===
    pub use crate::entities::{Customer, Order, OrderChanges, OrderItem};
    pub use crate::impl_entity;

    // === Services ===
    pub use crate::service::{LenientOrderService, OrderService};

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::{InMemoryCustomerRepository, InMemoryOrderRepository};
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresCustomerRepository, PostgresOrderRepository};

    // === Config ===
    pub use crate::config::{ServerConfig, ServiceConfig, StorageBackend, StorageConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, init_tracing};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
