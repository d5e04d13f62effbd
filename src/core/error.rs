//! Typed error handling for the order service
//!
//! Every operation of [`OrderService`](crate::service::OrderService) returns a
//! [`ServiceError`] on failure so callers can tell "nothing matched" apart
//! from "something went wrong".
//!
//! # Error Categories
//!
//! - [`ValidationError`]: bad input detected before the store is touched
//! - [`EntityError`]: a referenced record does not exist
//! - [`MappingError`]: a transfer object could not be turned into an entity
//! - [`StorageError`]: the repository backend failed
//!
//! [`ConfigError`] is separate: it is raised while loading configuration,
//! before any service exists.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.update_order(Some(id), dto).await {
//!     Ok(updated) => println!("updated {:?}", updated.id),
//!     Err(ServiceError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("order {} does not exist", id);
//!     }
//!     Err(e) => eprintln!("update failed: {}", e),
//! }
//! ```

use crate::core::entity::Entity;
use crate::entities::{Customer, Order};
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type returned by the order service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before any store access
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced record is missing
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Transfer object could not be converted
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Repository backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Entity(_) => StatusCode::NOT_FOUND,
            ServiceError::Mapping(e) => e.status_code(),
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Validation(e) => e.error_code(),
            ServiceError::Entity(EntityError::NotFound { .. }) => "ENTITY_NOT_FOUND",
            ServiceError::Mapping(e) => e.error_code(),
            ServiceError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether the error means "the record is not there" rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Entity(EntityError::NotFound { .. }))
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            ServiceError::Validation(ValidationError::MissingField { field }) => {
                Some(serde_json::json!({ "field": field }))
            }
            ServiceError::Validation(ValidationError::InvalidParameter { location, .. }) => {
                Some(serde_json::json!({ "location": location }))
            }
            _ => None,
        }
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidParameter {
            location: "path",
            message: rejection.body_text(),
        }
        .into()
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::InvalidParameter {
            location: "query",
            message: rejection.body_text(),
        }
        .into()
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Input errors raised before the store is accessed
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An identifier was required but absent
    #[error("Id cannot be null")]
    MissingId,

    /// Create was called with an identifier the store has not assigned
    #[error("Id {id} was supplied but ids are generated by the database")]
    IdAlreadyAssigned { id: i64 },

    /// A field required to build an order was absent
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    /// A path segment or query string could not be parsed
    #[error("Invalid {location} parameter: {message}")]
    InvalidParameter {
        location: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingId => "MISSING_ID",
            ValidationError::IdAlreadyAssigned { .. } => "ID_ALREADY_ASSIGNED",
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors about records that should exist but don't
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: i64 },
}

impl EntityError {
    /// `E` with this id does not exist
    pub fn not_found<E: Entity>(id: i64) -> Self {
        EntityError::NotFound {
            entity_type: E::resource_name_singular().to_string(),
            id,
        }
    }

    pub fn order_not_found(id: i64) -> Self {
        Self::not_found::<Order>(id)
    }

    pub fn customer_not_found(id: i64) -> Self {
        Self::not_found::<Customer>(id)
    }
}

// =============================================================================
// Mapping Errors
// =============================================================================

/// Errors converting a transfer object into an entity
#[derive(Debug, Error)]
pub enum MappingError {
    /// The DTO references a customer the lookup could not resolve
    #[error("Customer {id} referenced by order does not exist")]
    CustomerNotFound { id: i64 },

    /// The DTO carries no customer reference
    #[error("Order has no customer reference")]
    MissingCustomer,

    /// The customer lookup itself failed
    #[error("Customer lookup failed: {message}")]
    LookupFailed { message: String },
}

impl MappingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MappingError::CustomerNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            MappingError::MissingCustomer => StatusCode::BAD_REQUEST,
            MappingError::LookupFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            MappingError::CustomerNotFound { .. } => "CUSTOMER_NOT_FOUND",
            MappingError::MissingCustomer => "MISSING_CUSTOMER",
            MappingError::LookupFailed { .. } => "CUSTOMER_LOOKUP_FAILED",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to repository backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    #[error("{operation} failed: {message}")]
    QueryError { operation: String, message: String },
}

impl StorageError {
    /// A pool to `backend` could not be opened
    pub fn connection(backend: &str, message: impl Into<String>) -> Self {
        StorageError::ConnectionError {
            backend: backend.to_string(),
            message: message.into(),
        }
    }

    /// Wrap a repository failure with the operation that produced it
    pub fn query(operation: &str, err: anyhow::Error) -> Self {
        StorageError::QueryError {
            operation: operation.to_string(),
            message: format!("{:#}", err),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    Parse { message: String },

    #[error("Invalid configuration for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for order service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
