//! Core module containing the traits and types the order service is built on

pub mod dto;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod repository;

pub use dto::{OrderDto, OrderItemDto};
pub use entity::Entity;
pub use error::{
    ConfigError, EntityError, MappingError, ServiceError, ServiceResult, StorageError,
    ValidationError,
};
pub use mapper::OrderMapper;
pub use repository::{CustomerRepository, OrderRepository};
