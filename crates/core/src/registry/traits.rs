use crate::model::TypeDescriptor;

/// Source of per-type table metadata.
///
/// Types are identified by name. A source answers which table a type is
/// declared for and hands out the descriptor of that type.
pub trait MetadataSource {
    /// Table name declared for the type, if any.
    fn declared_table_name(&self, type_name: &str) -> Option<&str>;

    /// Descriptor of the type, if the source knows it.
    fn descriptor(&self, type_name: &str) -> Option<&TypeDescriptor>;
}

/// A record type declaring its table metadata next to its definition.
///
/// # Examples
///
/// ```
/// use tablegen_core::model::{StorageType, TypeDescriptor};
/// use tablegen_core::registry::{TableEntity, TypeRegistry};
///
/// struct Order;
///
/// impl TableEntity for Order {
///     const TABLE_NAME: Option<&'static str> = Some("Orders");
///
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::new("Order").with_hash_key("OrderId", StorageType::String)
///     }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Order>();
/// assert_eq!(registry.discover_tables()[0].name(), "Orders");
/// ```
pub trait TableEntity {
    /// Name of the physical table the type is stored in.
    const TABLE_NAME: Option<&'static str>;

    fn descriptor() -> TypeDescriptor;
}
