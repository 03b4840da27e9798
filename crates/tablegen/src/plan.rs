//! Building every discovered table from a registry.

use serde::Serialize;
use tablegen_core::{discover_builders, TableResourceArgs, TypeRegistry};

use crate::config::Config;
use crate::error::{Result, TablegenError};

/// A built table together with the types that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePlan {
    pub table: String,
    pub members: Vec<String>,
    pub args: TableResourceArgs,
}

/// Discovers every table in `registry` and runs its builder.
///
/// Fails on the first table whose declarations are invalid, so nothing is
/// returned for a partially valid registry. `source_name` only labels the
/// error raised when no type declares a table.
pub fn build_plans(
    registry: &TypeRegistry,
    config: &Config,
    source_name: &str,
) -> Result<Vec<TablePlan>> {
    let builders = discover_builders(registry, registry.type_names(), config.conflict_policy);
    if builders.is_empty() {
        return Err(TablegenError::NoTables {
            source_name: source_name.to_string(),
        });
    }

    let mut plans = Vec::with_capacity(builders.len());
    for builder in &builders {
        let args = builder.build()?;
        plans.push(TablePlan {
            table: builder.table_name().to_string(),
            members: builder.group().type_names().map(str::to_string).collect(),
            args,
        });
    }

    tracing::info!(
        tables = plans.len(),
        policy = %config.conflict_policy,
        "Built table resources"
    );
    Ok(plans)
}

/// Checks that every plan maps onto a create-table request.
pub fn validate_requests(plans: &[TablePlan], config: &Config) -> Result<()> {
    for plan in plans {
        crate::sdk::to_create_table_input(&plan.args, config.key_attributes_only)?;
        tracing::debug!(table = %plan.table, "Create-table request is valid");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablegen_core::model::{Field, IndexDescriptor, StorageType, TypeDescriptor};
    use tablegen_core::{ConfigurationError, ConflictPolicy};

    fn config(policy: ConflictPolicy) -> Config {
        Config {
            conflict_policy: policy,
            key_attributes_only: true,
        }
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register_descriptor(
                Some("TestTable".to_string()),
                TypeDescriptor::new("Table")
                    .with_hash_key("TestHashKey", StorageType::String)
                    .with_range_key("TestRangeKey", StorageType::String)
                    .with_field("NumberAttribute", StorageType::Number)
                    .with_capacity(10, 5)
                    .with_global_index(
                        IndexDescriptor::new("GlobalIndexOne", Field::string("TestRangeKey"))
                            .include(["NumberAttribute"]),
                    ),
            )
            .register_descriptor(None, TypeDescriptor::new("Scratch"))
            .register_descriptor(
                Some("Users".to_string()),
                TypeDescriptor::new("User").with_hash_key("UserId", StorageType::String),
            );
        registry
    }

    #[test]
    fn test_build_plans_in_discovery_order() {
        let plans = build_plans(&registry(), &config(ConflictPolicy::Warn), "test").unwrap();

        let tables: Vec<&str> = plans.iter().map(|p| p.table.as_str()).collect();
        assert_eq!(tables, vec!["TestTable", "Users"]);
        assert_eq!(plans[0].members, vec!["Table".to_string()]);
        assert_eq!(plans[0].args.hash_key.as_deref(), Some("TestHashKey"));
        assert!(plans[0].args.index("GlobalIndexOne").is_some());
    }

    #[test]
    fn test_empty_registry_has_no_tables() {
        let mut registry = TypeRegistry::new();
        registry.register_descriptor(None, TypeDescriptor::new("Scratch"));

        let result = build_plans(&registry, &config(ConflictPolicy::Warn), "tables.json");

        assert!(matches!(
            result,
            Err(TablegenError::NoTables { source_name }) if source_name == "tables.json"
        ));
    }

    #[test]
    fn test_invalid_table_fails_the_whole_build() {
        let mut registry = registry();
        registry.register_descriptor(
            Some("Broken".to_string()),
            TypeDescriptor::new("Broken").with_field("Name", StorageType::String),
        );

        let result = build_plans(&registry, &config(ConflictPolicy::Warn), "test");

        assert!(matches!(
            result,
            Err(TablegenError::Configuration(ConfigurationError::MissingHashKey { table }))
                if table == "Broken"
        ));
    }

    #[test]
    fn test_validate_requests() {
        let config = config(ConflictPolicy::Warn);
        let plans = build_plans(&registry(), &config, "test").unwrap();

        assert!(validate_requests(&plans, &config).is_ok());
    }
}
