//! Metadata discovery: grouping annotated types by their declared table.
//!
//! This is part of the Functional Core - it only reads from the metadata
//! source and never fails. Types without a table declaration are ignored.

use std::collections::HashMap;

use crate::model::TypeDescriptor;
use crate::registry::MetadataSource;
use crate::table::{ConflictPolicy, TableGroup, TableResourceBuilder};

/// Groups types by declared table name.
///
/// Groups come out in the order their table name was first seen; within a
/// group, types keep the order they were encountered in. A type that
/// declares a table but has no descriptor in the source is skipped.
///
/// # Examples
///
/// ```
/// use tablegen_core::discovery::discover;
/// use tablegen_core::model::{StorageType, TypeDescriptor};
/// use tablegen_core::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register_descriptor(
///         Some("Orders".to_string()),
///         TypeDescriptor::new("Order").with_hash_key("Id", StorageType::String),
///     )
///     .register_descriptor(None, TypeDescriptor::new("Scratch"));
///
/// let groups = discover(&registry, ["Order", "Scratch"]);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].name(), "Orders");
/// ```
pub fn discover<'a, S, I>(source: &S, type_names: I) -> Vec<TableGroup>
where
    S: MetadataSource + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<(String, Vec<TypeDescriptor>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for type_name in type_names {
        let Some(table_name) = source.declared_table_name(type_name) else {
            continue;
        };

        let Some(descriptor) = source.descriptor(type_name) else {
            tracing::warn!(
                type_name,
                table = table_name,
                "Type declares a table but has no descriptor, skipping"
            );
            continue;
        };

        let position = match positions.get(table_name) {
            Some(&position) => position,
            None => {
                positions.insert(table_name.to_string(), order.len());
                order.push((table_name.to_string(), Vec::new()));
                order.len() - 1
            }
        };
        order[position].1.push(descriptor.clone());
    }

    let groups: Vec<TableGroup> = order
        .into_iter()
        .map(|(name, descriptors)| TableGroup::from_parts(name, descriptors))
        .collect();

    tracing::debug!(tables = groups.len(), "Discovered table groups");
    groups
}

/// Discovers table groups and wraps each one in a builder.
pub fn discover_builders<'a, S, I>(
    source: &S,
    type_names: I,
    policy: ConflictPolicy,
) -> Vec<TableResourceBuilder>
where
    S: MetadataSource + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    discover(source, type_names)
        .into_iter()
        .map(|group| TableResourceBuilder::new(group).with_conflict_policy(policy))
        .collect()
}
