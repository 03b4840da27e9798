//! Per-type metadata descriptors.
//!
//! A `TypeDescriptor` is what the metadata source knows about one record
//! type: its storable fields, its keys, its throughput and the global
//! secondary indexes projected from it.

use serde::{Deserialize, Serialize};

use super::types::{Capacity, Field, ProjectionType, StorageType};

/// Metadata of one global secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub name: String,
    pub hash_key: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key: Option<Field>,
    #[serde(default)]
    pub projection: ProjectionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projected_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
}

impl IndexDescriptor {
    /// Creates an index projecting all attributes.
    pub fn new(name: impl Into<String>, hash_key: Field) -> Self {
        Self {
            name: name.into(),
            hash_key,
            range_key: None,
            projection: ProjectionType::All,
            projected_fields: Vec::new(),
            capacity: None,
        }
    }

    /// Infers the projection from the fields an index projection type carries.
    ///
    /// Projecting nothing beyond the index keys yields `KEYS_ONLY`, projecting
    /// every non-key field of the table yields `ALL`, anything in between is
    /// an `INCLUDE` of the projected non-key fields.
    pub fn from_projection(
        name: impl Into<String>,
        hash_key: Field,
        range_key: Option<Field>,
        projected: &[Field],
        table_fields: &[Field],
    ) -> Self {
        let is_key = |field_name: &str| {
            field_name == hash_key.name
                || range_key
                    .as_ref()
                    .is_some_and(|range| range.name == field_name)
        };

        let mut non_key: Vec<String> = Vec::new();
        for field in projected {
            if !is_key(&field.name) && !non_key.contains(&field.name) {
                non_key.push(field.name.clone());
            }
        }

        let covers_table = table_fields
            .iter()
            .filter(|field| !is_key(&field.name))
            .all(|field| non_key.contains(&field.name));

        let (projection, projected_fields) = if non_key.is_empty() {
            (ProjectionType::KeysOnly, Vec::new())
        } else if covers_table {
            (ProjectionType::All, Vec::new())
        } else {
            (ProjectionType::Include, non_key)
        };

        Self {
            name: name.into(),
            hash_key,
            range_key,
            projection,
            projected_fields,
            capacity: None,
        }
    }

    pub fn with_range_key(mut self, range_key: Field) -> Self {
        self.range_key = Some(range_key);
        self
    }

    /// Projects only the index and table keys.
    pub fn keys_only(mut self) -> Self {
        self.projection = ProjectionType::KeysOnly;
        self.projected_fields.clear();
        self
    }

    /// Projects the given non-key attributes.
    pub fn include<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = ProjectionType::Include;
        self.projected_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_capacity(mut self, read: u64, write: u64) -> Self {
        self.capacity = Some(Capacity::new(read, write));
        self
    }

    /// Key fields of this index, hash key first.
    pub fn key_fields(&self) -> impl Iterator<Item = &Field> {
        std::iter::once(&self.hash_key).chain(self.range_key.as_ref())
    }
}

/// Metadata of one record type stored in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_key: Option<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key: Option<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_indexes: Vec<IndexDescriptor>,
}

impl TypeDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            hash_key: None,
            range_key: None,
            capacity: None,
            global_indexes: Vec::new(),
        }
    }

    /// Adds a storable field. A name already declared is left untouched.
    pub fn with_field(mut self, name: impl Into<String>, storage_type: StorageType) -> Self {
        self.push_field(Field::new(name, storage_type));
        self
    }

    /// Declares the partition key, adding it to the fields when missing.
    pub fn with_hash_key(mut self, name: impl Into<String>, storage_type: StorageType) -> Self {
        let field = Field::new(name, storage_type);
        self.push_field(field.clone());
        self.hash_key = Some(field);
        self
    }

    /// Declares the sort key, adding it to the fields when missing.
    pub fn with_range_key(mut self, name: impl Into<String>, storage_type: StorageType) -> Self {
        let field = Field::new(name, storage_type);
        self.push_field(field.clone());
        self.range_key = Some(field);
        self
    }

    /// Declares provisioned throughput for the table.
    pub fn with_capacity(mut self, read: u64, write: u64) -> Self {
        self.capacity = Some(Capacity::new(read, write));
        self
    }

    pub fn with_global_index(mut self, index: IndexDescriptor) -> Self {
        self.global_indexes.push(index);
        self
    }

    /// Ensures the declared keys also appear in the field list.
    ///
    /// Descriptors produced by the builder methods already hold this;
    /// descriptors parsed from external declarations may not.
    pub fn normalized(mut self) -> Self {
        let keys: Vec<Field> = self
            .hash_key
            .iter()
            .chain(self.range_key.iter())
            .cloned()
            .collect();
        for key in keys.into_iter().rev() {
            if self.field(&key.name).is_none() {
                self.fields.insert(0, key);
            }
        }
        self
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn push_field(&mut self, field: Field) {
        if self.field(&field.name).is_none() {
            self.fields.push(field);
        }
    }
}
