//! Explicit registry of annotated record types.
//!
//! Types are registered once at startup, either from a `TableEntity`
//! implementation or from an externally generated descriptor. Registration
//! order is the encounter order used by discovery.

mod traits;

use std::collections::HashMap;

pub use traits::{MetadataSource, TableEntity};

use crate::discovery::discover;
use crate::model::TypeDescriptor;
use crate::table::TableGroup;

/// One registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Registration {
    type_name: String,
    table_name: Option<String>,
    descriptor: TypeDescriptor,
}

/// Registration-ordered store of type descriptors.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<Registration>,
    positions: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type that declares its own metadata.
    ///
    /// The type is keyed by its Rust type name.
    pub fn register<T: TableEntity>(&mut self) -> &mut Self {
        let type_name = std::any::type_name::<T>().to_string();
        self.insert(Registration {
            type_name,
            table_name: T::TABLE_NAME.map(str::to_string),
            descriptor: T::descriptor(),
        });
        self
    }

    /// Registers an externally produced descriptor, keyed by its type name.
    pub fn register_descriptor(
        &mut self,
        table_name: Option<String>,
        descriptor: TypeDescriptor,
    ) -> &mut Self {
        self.insert(Registration {
            type_name: descriptor.type_name.clone(),
            table_name,
            descriptor,
        });
        self
    }

    /// Registered type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.type_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups every registered type by its declared table name.
    pub fn discover_tables(&self) -> Vec<TableGroup> {
        discover(self, self.type_names())
    }

    fn insert(&mut self, registration: Registration) {
        match self.positions.get(&registration.type_name) {
            Some(&position) => {
                tracing::debug!(
                    type_name = %registration.type_name,
                    "Replacing registered type"
                );
                self.entries[position] = registration;
            }
            None => {
                self.positions
                    .insert(registration.type_name.clone(), self.entries.len());
                self.entries.push(registration);
            }
        }
    }

    fn get(&self, type_name: &str) -> Option<&Registration> {
        self.positions
            .get(type_name)
            .map(|&position| &self.entries[position])
    }
}

impl MetadataSource for TypeRegistry {
    fn declared_table_name(&self, type_name: &str) -> Option<&str> {
        self.get(type_name)?.table_name.as_deref()
    }

    fn descriptor(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.get(type_name).map(|entry| &entry.descriptor)
    }
}
