use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage type of a field, as the key-value store names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(rename = "S")]
    String,
    #[serde(rename = "N")]
    Number,
    #[serde(rename = "B")]
    Binary,
    #[serde(rename = "BOOL")]
    Bool,
    #[serde(rename = "L")]
    List,
    #[serde(rename = "M")]
    Map,
    #[serde(rename = "SS")]
    StringSet,
    #[serde(rename = "NS")]
    NumberSet,
    #[serde(rename = "BS")]
    BinarySet,
    #[serde(rename = "NULL")]
    Null,
}

impl StorageType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::String => "S",
            StorageType::Number => "N",
            StorageType::Binary => "B",
            StorageType::Bool => "BOOL",
            StorageType::List => "L",
            StorageType::Map => "M",
            StorageType::StringSet => "SS",
            StorageType::NumberSet => "NS",
            StorageType::BinarySet => "BS",
            StorageType::Null => "NULL",
        }
    }

    /// Only scalar types can back a table or index key.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            StorageType::String | StorageType::Number | StorageType::Binary
        )
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storable field of a type: its name and storage type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
}

impl Field {
    pub fn new(name: impl Into<String>, storage_type: StorageType) -> Self {
        Self {
            name: name.into(),
            storage_type,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, StorageType::String)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, StorageType::Number)
    }
}

/// Provisioned read/write capacity units.
///
/// Both units are declared together; a type either provisions
/// throughput or it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capacity {
    pub read: u64,
    pub write: u64,
}

impl Capacity {
    pub fn new(read: u64, write: u64) -> Self {
        Self { read, write }
    }
}

/// Which attributes are copied into a secondary index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionType {
    #[default]
    All,
    KeysOnly,
    Include,
}

impl ProjectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionType::All => "ALL",
            ProjectionType::KeysOnly => "KEYS_ONLY",
            ProjectionType::Include => "INCLUDE",
        }
    }
}

impl fmt::Display for ProjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
