//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::build_order_routes;
use crate::config::{ServiceConfig, StorageBackend};
use crate::core::{CustomerRepository, OrderRepository};
use crate::service::OrderService;
use anyhow::{Result, anyhow};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the order HTTP server
///
/// # Example
///
/// ```ignore
/// let orders = InMemoryOrderRepository::new();
/// let customers = orders.customers().clone();
///
/// ServerBuilder::new()
///     .with_repositories(orders, customers)
///     .serve("127.0.0.1:3000")
///     .await?;
/// ```
pub struct ServerBuilder {
    service: Option<OrderService>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self { service: None }
    }

    /// Set the order service (required)
    pub fn with_service(mut self, service: OrderService) -> Self {
        self.service = Some(service);
        self
    }

    /// Build the order service from a pair of repositories
    pub fn with_repositories(
        self,
        orders: impl OrderRepository + 'static,
        customers: impl CustomerRepository + 'static,
    ) -> Self {
        self.with_service(OrderService::new(orders, customers))
    }

    /// Build the order service for the backend named in `config`
    pub async fn with_config(self, config: &ServiceConfig) -> Result<Self> {
        let service = match config.storage.backend {
            StorageBackend::InMemory => in_memory_service()?,
            StorageBackend::Postgres => postgres_service(config).await?,
        };
        tracing::info!(backend = ?config.storage.backend, "Order repositories ready");
        Ok(self.with_service(service))
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let service = self
            .service
            .ok_or_else(|| anyhow!("OrderService is required. Call .with_service() first."))?;

        let app = build_order_routes(AppState { service });
        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "in-memory")]
fn in_memory_service() -> Result<OrderService> {
    use crate::storage::InMemoryOrderRepository;

    let orders = InMemoryOrderRepository::new();
    let customers = orders.customers().clone();
    Ok(OrderService::new(orders, customers))
}

#[cfg(not(feature = "in-memory"))]
fn in_memory_service() -> Result<OrderService> {
    Err(anyhow!("in_memory backend requires the `in-memory` feature"))
}

#[cfg(feature = "postgres")]
async fn postgres_service(config: &ServiceConfig) -> Result<OrderService> {
    use crate::storage::postgres::{self, PostgresCustomerRepository, PostgresOrderRepository};
    use std::sync::Arc;

    let pool = postgres::connect(&config.storage).await?;
    postgres::run_migrations(&pool).await?;

    Ok(OrderService::from_shared(
        Arc::new(PostgresOrderRepository::new(pool.clone())),
        Arc::new(PostgresCustomerRepository::new(pool)),
    ))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_service(_config: &ServiceConfig) -> Result<OrderService> {
    Err(anyhow!("postgres backend requires the `postgres` feature"))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
