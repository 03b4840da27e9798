//! Provisioning arguments of one table resource.
//!
//! Created empty by the caller, filled in by `TableResourceBuilder` and then
//! handed to the provisioning engine.

use serde::{Deserialize, Serialize};

use crate::model::{Field, ProjectionType, StorageType};

/// Billing mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMode {
    PayPerRequest,
    Provisioned,
}

impl BillingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingMode::PayPerRequest => "PAY_PER_REQUEST",
            BillingMode::Provisioned => "PROVISIONED",
        }
    }
}

/// An attribute declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeArgs {
    pub name: String,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
}

impl From<&Field> for AttributeArgs {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            storage_type: field.storage_type,
        }
    }
}

/// Read/write capacity in the integer type the provisioning engine takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputArgs {
    pub read: i64,
    pub write: i64,
}

/// A global secondary index declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSecondaryIndexArgs {
    pub name: String,
    pub hash_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key: Option<String>,
    pub projection_type: ProjectionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<ThroughputArgs>,
}

/// Accumulated arguments of a table resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableResourceArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeArgs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<ThroughputArgs>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndexArgs>,
}

impl TableResourceArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an attribute declaration by exact name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeArgs> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    /// Looks up an index declaration by name.
    pub fn index(&self, name: &str) -> Option<&GlobalSecondaryIndexArgs> {
        self.global_secondary_indexes
            .iter()
            .find(|index| index.name == name)
    }

    /// Names used by the table or any index key schema, table keys first.
    pub fn key_attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let table_keys = self.hash_key.iter().chain(self.range_key.iter());
        let index_keys = self
            .global_secondary_indexes
            .iter()
            .flat_map(|index| std::iter::once(&index.hash_key).chain(index.range_key.iter()));
        for name in table_keys.chain(index_keys) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(name: &str, hash: &str, range: Option<&str>) -> GlobalSecondaryIndexArgs {
        GlobalSecondaryIndexArgs {
            name: name.to_string(),
            hash_key: hash.to_string(),
            range_key: range.map(str::to_string),
            projection_type: ProjectionType::All,
            non_key_attributes: Vec::new(),
            capacity: None,
        }
    }

    #[test]
    fn test_new_args_are_empty() {
        let args = TableResourceArgs::new();
        assert!(args.attributes.is_empty());
        assert!(args.hash_key.is_none());
        assert!(args.billing_mode.is_none());
        assert!(args.global_secondary_indexes.is_empty());
    }

    #[test]
    fn test_key_attribute_names_deduplicates() {
        let args = TableResourceArgs {
            hash_key: Some("PK".to_string()),
            range_key: Some("SK".to_string()),
            global_secondary_indexes: vec![
                index("GSI1", "SK", Some("PK")),
                index("GSI2", "Email", None),
            ],
            ..Default::default()
        };

        assert_eq!(args.key_attribute_names(), vec!["PK", "SK", "Email"]);
    }

    #[test]
    fn test_billing_mode_serializes_in_wire_form() {
        assert_eq!(
            serde_json::to_string(&BillingMode::PayPerRequest).unwrap(),
            "\"PAY_PER_REQUEST\""
        );
        assert_eq!(BillingMode::Provisioned.as_str(), "PROVISIONED");
    }

    #[test]
    fn test_lookup_by_name() {
        let args = TableResourceArgs {
            attributes: vec![AttributeArgs::from(&Field::number("Total"))],
            global_secondary_indexes: vec![index("GSI1", "Total", None)],
            ..Default::default()
        };

        assert_eq!(
            args.attribute("Total").map(|a| a.storage_type),
            Some(StorageType::Number)
        );
        assert!(args.attribute("total").is_none());
        assert!(args.index("GSI1").is_some());
        assert!(args.index("GSI2").is_none());
    }
}
