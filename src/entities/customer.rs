//! Customer entity
//!
//! Customers are managed elsewhere; orders only hold a resolved reference.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

crate::impl_entity!(Customer, "customers", "customer");

impl Customer {
    /// A customer that has not been saved yet
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email,
        }
    }
}
