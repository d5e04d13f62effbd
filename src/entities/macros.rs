//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::entity::Entity) for a struct with an
/// `id: Option<i64>` field.
///
/// # Example
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// pub struct Customer {
///     pub id: Option<i64>,
///     pub name: String,
/// }
///
/// impl_entity!(Customer, "customers", "customer");
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $plural:expr, $singular:expr) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn assign_id(&mut self, id: i64) {
                self.id = Some(id);
            }
        }
    };
}
