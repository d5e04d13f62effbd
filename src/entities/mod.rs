//! Persisted records of the order domain

pub mod customer;
pub mod macros;
pub mod order;
pub mod order_item;

pub use customer::Customer;
pub use order::{Order, OrderChanges};
pub use order_item::OrderItem;
