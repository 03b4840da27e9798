//! Declaration manifests.
//!
//! A manifest is the generated form of the type registry: one JSON entry per
//! record type, carrying its table name and descriptor.
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "type": "Order",
//!       "table": "Orders",
//!       "fields": [{"name": "OrderId", "type": "S"}],
//!       "hash_key": {"name": "OrderId", "type": "S"},
//!       "capacity": {"read": 10, "write": 5},
//!       "projected_indexes": [
//!         {
//!           "name": "ByCustomer",
//!           "hash_key": {"name": "CustomerId", "type": "S"},
//!           "projects": ["CustomerId", "Total"]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Entries under `global_indexes` state their projection explicitly.
//! Entries under `projected_indexes` list the fields they project and get
//! their projection type inferred from the type's fields.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tablegen_core::model::{Capacity, Field, IndexDescriptor, TypeDescriptor};
use tablegen_core::TypeRegistry;

use crate::error::{Result, TablegenError};

/// One declared record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Table the type is stored in; undeclared types are ignored by discovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Indexes whose projection is inferred from the fields they project.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projected_indexes: Vec<ProjectedIndex>,
    #[serde(flatten)]
    pub descriptor: TypeDescriptor,
}

/// An index declared by the fields it projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedIndex {
    pub name: String,
    pub hash_key: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key: Option<Field>,
    /// Projected field names, keys included or not.
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
}

impl TypeDeclaration {
    /// The declared descriptor with keys normalized and projected indexes
    /// resolved against its fields.
    pub fn resolve(self) -> TypeDescriptor {
        let mut descriptor = self.descriptor.normalized();

        for index in self.projected_indexes {
            let projected: Vec<Field> = index
                .projects
                .iter()
                .filter_map(|name| {
                    let field = descriptor.field(name).cloned();
                    if field.is_none() {
                        tracing::warn!(
                            type_name = %descriptor.type_name,
                            index = %index.name,
                            field = %name,
                            "Projected field is not declared on the type, skipping"
                        );
                    }
                    field
                })
                .collect();

            let mut resolved = IndexDescriptor::from_projection(
                index.name,
                index.hash_key,
                index.range_key,
                &projected,
                &descriptor.fields,
            );
            resolved.capacity = index.capacity;
            descriptor = descriptor.with_global_index(resolved);
        }
        descriptor
    }
}

/// A parsed declaration manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let manifest: Manifest = contents.parse()?;
        tracing::debug!(
            path = %path.display(),
            types = manifest.types.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Registers every declaration in document order.
    pub fn into_registry(self) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for declaration in self.types {
            let table = declaration.table.clone();
            registry.register_descriptor(table, declaration.resolve());
        }
        tracing::debug!(types = registry.len(), "Registered manifest declarations");
        registry
    }
}

impl FromStr for Manifest {
    type Err = TablegenError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
