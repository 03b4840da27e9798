use thiserror::Error;

use crate::model::StorageType;

/// Errors raised while building the provisioning arguments of a table.
///
/// All of them surface before any provisioning call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Table '{table}' has no type declaring a hash key")]
    MissingHashKey { table: String },

    #[error("Table group '{table}' has no types")]
    EmptyGroup { table: String },

    #[error("Capacity units {units} on {target} of table '{table}' are out of range")]
    CapacityOutOfRange {
        table: String,
        target: String,
        units: u64,
    },

    #[error("Index '{index}' of table '{table}' uses key field '{field}' not declared on {type_name}")]
    UnknownIndexKey {
        table: String,
        index: String,
        field: String,
        type_name: String,
    },

    #[error("Key field '{field}' of table '{table}' has non-scalar type {storage_type}")]
    NonScalarKey {
        table: String,
        field: String,
        storage_type: StorageType,
    },

    #[error("Table '{table}' capacity declared by {first} conflicts with {other}")]
    ConflictingCapacity {
        table: String,
        first: String,
        other: String,
    },

    #[error("Attribute '{attribute}' of table '{table}' declared as {existing} and {declared}")]
    ConflictingAttributeType {
        table: String,
        attribute: String,
        existing: StorageType,
        declared: StorageType,
    },

    #[error("Table '{table}' key schema declared by {first} conflicts with {other}")]
    ConflictingKeySchema {
        table: String,
        first: String,
        other: String,
    },

    #[error("Index '{index}' of table '{table}' is declared more than once on {type_name}")]
    DuplicateIndex {
        table: String,
        index: String,
        type_name: String,
    },

    #[error("Table '{table}' indexes declared by {owner} and {other}")]
    MultipleIndexOwners {
        table: String,
        owner: String,
        other: String,
    },
}

/// Result type for table building operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_hash_key_display() {
        let error = ConfigurationError::MissingHashKey {
            table: "Orders".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table 'Orders' has no type declaring a hash key"
        );
    }

    #[test]
    fn test_capacity_out_of_range_display() {
        let error = ConfigurationError::CapacityOutOfRange {
            table: "Orders".to_string(),
            target: "index 'ByCustomer'".to_string(),
            units: u64::MAX,
        };
        assert_eq!(
            error.to_string(),
            format!(
                "Capacity units {} on index 'ByCustomer' of table 'Orders' are out of range",
                u64::MAX
            )
        );
    }

    #[test]
    fn test_duplicate_index_display() {
        let error = ConfigurationError::DuplicateIndex {
            table: "Orders".to_string(),
            index: "ByDate".to_string(),
            type_name: "Order".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Index 'ByDate' of table 'Orders' is declared more than once on Order"
        );
    }

    #[test]
    fn test_unknown_index_key_display() {
        let error = ConfigurationError::UnknownIndexKey {
            table: "Orders".to_string(),
            index: "ByCustomer".to_string(),
            field: "CustomerId".to_string(),
            type_name: "Order".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Index 'ByCustomer' of table 'Orders' uses key field 'CustomerId' not declared on Order"
        );
    }

    #[test]
    fn test_conflicting_attribute_type_display() {
        let error = ConfigurationError::ConflictingAttributeType {
            table: "Orders".to_string(),
            attribute: "Total".to_string(),
            existing: StorageType::Number,
            declared: StorageType::String,
        };
        assert_eq!(
            error.to_string(),
            "Attribute 'Total' of table 'Orders' declared as N and S"
        );
    }

    #[test]
    fn test_non_scalar_key_display() {
        let error = ConfigurationError::NonScalarKey {
            table: "Orders".to_string(),
            field: "Tags".to_string(),
            storage_type: StorageType::StringSet,
        };
        assert_eq!(
            error.to_string(),
            "Key field 'Tags' of table 'Orders' has non-scalar type SS"
        );
    }
}
