//! Repository implementations for different backends

#[cfg(feature = "in-memory")]
pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "in-memory")]
pub use in_memory::{InMemoryCustomerRepository, InMemoryOrderRepository};
#[cfg(feature = "postgres")]
pub use postgres::{PostgresCustomerRepository, PostgresOrderRepository};
