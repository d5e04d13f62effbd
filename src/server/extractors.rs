//! Extractors whose rejections are reported as [`ServiceError`] bodies
//!
//! axum's own `Path` and `Query` reject with plain text; these wrappers turn
//! the rejection into the `{code, message, details}` JSON used by every
//! other error.

use axum::extract::{FromRequestParts, Path, Query};

use crate::core::ServiceError;

/// `Path` with a JSON rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(ServiceError))]
pub struct IdPath<T>(pub T);

/// `Query` with a JSON rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ServiceError))]
pub struct QueryParams<T>(pub T);
