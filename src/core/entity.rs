//! Entity trait shared by every persisted record

/// Base trait for all persisted records.
///
/// Identifiers are assigned by the store, so an entity that has never been
/// saved carries no id. Implementations are generated with
/// [`impl_entity!`](crate::impl_entity).
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs and table names (e.g., "orders")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order")
    fn resource_name_singular() -> &'static str;

    /// Store-assigned identifier, absent until persisted
    fn id(&self) -> Option<i64>;

    /// Set the identifier after the store assigned one
    fn assign_id(&mut self, id: i64);
}
