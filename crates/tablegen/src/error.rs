//! Error types for the tablegen shell.

use tablegen_core::ConfigurationError;
use thiserror::Error;

/// Result type alias for tablegen operations.
pub type Result<T> = std::result::Result<T, TablegenError>;

/// Errors that can occur while loading declarations or producing output.
#[derive(Error, Debug)]
pub enum TablegenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to build provisioning request: {0}")]
    Sdk(String),

    #[error("No table declarations found in {source_name}")]
    NoTables { source_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = TablegenError::from(ConfigurationError::MissingHashKey {
            table: "Orders".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Configuration error: Table 'Orders' has no type declaring a hash key"
        );
    }

    #[test]
    fn test_no_tables_display() {
        let error = TablegenError::NoTables {
            source_name: "tables.json".to_string(),
        };
        assert_eq!(error.to_string(), "No table declarations found in tables.json");
    }

    #[test]
    fn test_sdk_display() {
        let error = TablegenError::Sdk("missing table name".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to build provisioning request: missing table name"
        );
    }
}
