//! Conversions between entities and transfer objects
//!
//! Entity → DTO is pure. DTO → entity needs to resolve the customer
//! reference, so the customer lookup is passed in explicitly.

use crate::core::dto::{OrderDto, OrderItemDto};
use crate::core::error::{MappingError, ServiceResult, ValidationError};
use crate::core::repository::CustomerRepository;
use crate::entities::{Customer, Order, OrderChanges, OrderItem};
use chrono::Utc;

/// Maps orders and order items to and from their transfer objects
pub struct OrderMapper;

impl OrderMapper {
    pub fn order_to_dto(order: &Order) -> OrderDto {
        OrderDto {
            id: order.id,
            customer_id: order.customer_id(),
            status: Some(order.status.clone()),
            order_date: Some(order.order_date),
            items: Some(order.items.iter().map(Self::order_item_to_dto).collect()),
        }
    }

    pub fn order_item_to_dto(item: &OrderItem) -> OrderItemDto {
        OrderItemDto {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
        }
    }

    pub fn dto_to_order_item(dto: &OrderItemDto) -> OrderItem {
        OrderItem {
            id: dto.id,
            order_id: dto.order_id,
            product_id: dto.product_id,
            quantity: dto.quantity,
            price: dto.price,
        }
    }

    /// Build a complete order from a DTO.
    ///
    /// The customer reference and status are required; a missing order date
    /// defaults to now.
    pub async fn dto_to_order(
        dto: OrderDto,
        customers: &dyn CustomerRepository,
    ) -> ServiceResult<Order> {
        let customer_id = dto.customer_id.ok_or(MappingError::MissingCustomer)?;
        let customer = Self::resolve_customer(customer_id, customers).await?;
        let status = dto.status.ok_or_else(|| ValidationError::MissingField {
            field: "status".to_string(),
        })?;

        let mut order = Order {
            id: dto.id,
            customer,
            status,
            order_date: dto.order_date.unwrap_or_else(Utc::now),
            items: dto
                .items
                .unwrap_or_default()
                .iter()
                .map(Self::dto_to_order_item)
                .collect(),
        };
        order.bind_items();

        Ok(order)
    }

    /// Build the detached partial order applied by an update
    pub async fn dto_to_changes(
        dto: OrderDto,
        customers: &dyn CustomerRepository,
    ) -> ServiceResult<OrderChanges> {
        let customer = match dto.customer_id {
            Some(id) => Some(Self::resolve_customer(id, customers).await?),
            None => None,
        };

        Ok(OrderChanges {
            customer,
            status: dto.status,
            order_date: dto.order_date,
            items: dto
                .items
                .map(|items| items.iter().map(Self::dto_to_order_item).collect()),
        })
    }

    async fn resolve_customer(
        id: i64,
        customers: &dyn CustomerRepository,
    ) -> Result<Customer, MappingError> {
        customers
            .find_by_id(id)
            .await
            .map_err(|e| MappingError::LookupFailed {
                message: e.to_string(),
            })?
            .ok_or(MappingError::CustomerNotFound { id })
    }
}
