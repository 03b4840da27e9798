//! Pretty output formatting.
//!
//! Pure functions returning plain lines; coloring happens at print time.

use tablegen_core::model::ProjectionType;
use tablegen_core::table::{BillingMode, GlobalSecondaryIndexArgs, ThroughputArgs};
use tablegen_core::{TableGroup, TableResourceArgs};

use crate::plan::TablePlan;

/// Format the provisioning plan of one table.
pub fn format_plan(plan: &TablePlan) -> Vec<String> {
    let args = &plan.args;
    let mut lines = vec![
        format!("+ Table: {}", plan.table),
        format!("  Types: {}", plan.members.join(", ")),
    ];

    if let Some(hash_key) = &args.hash_key {
        lines.push(format!("  Partition key: {}", key_label(args, hash_key)));
    }
    if let Some(range_key) = &args.range_key {
        lines.push(format!("  Sort key: {}", key_label(args, range_key)));
    }

    let attributes: Vec<String> = args
        .attributes
        .iter()
        .map(|attribute| format!("{} ({})", attribute.name, attribute.storage_type))
        .collect();
    lines.push(format!("  Attributes: {}", attributes.join(", ")));

    match args.billing_mode {
        Some(BillingMode::Provisioned) => match &args.capacity {
            Some(capacity) => lines.push(format!(
                "  Billing: PROVISIONED ({})",
                format_throughput(capacity)
            )),
            None => lines.push("  Billing: PROVISIONED".to_string()),
        },
        Some(BillingMode::PayPerRequest) => lines.push("  Billing: PAY_PER_REQUEST".to_string()),
        None => {}
    }

    for index in &args.global_secondary_indexes {
        lines.extend(format_index(args, index));
    }
    lines
}

fn format_index(args: &TableResourceArgs, index: &GlobalSecondaryIndexArgs) -> Vec<String> {
    let mut lines = vec![
        format!("  + GSI: {}", index.name),
        format!("    Partition key: {}", key_label(args, &index.hash_key)),
    ];
    if let Some(range_key) = &index.range_key {
        lines.push(format!("    Sort key: {}", key_label(args, range_key)));
    }
    match index.projection_type {
        ProjectionType::Include => lines.push(format!(
            "    Projection: INCLUDE [{}]",
            index.non_key_attributes.join(", ")
        )),
        other => lines.push(format!("    Projection: {}", other)),
    }
    if let Some(capacity) = &index.capacity {
        lines.push(format!("    Throughput: {}", format_throughput(capacity)));
    }
    lines
}

/// Format discovered tables and their member types.
pub fn format_groups(groups: &[TableGroup]) -> Vec<String> {
    if groups.is_empty() {
        return vec!["No tables found.".to_string()];
    }
    let mut lines = vec![format!("TABLES ({})", groups.len()), "-".repeat(40)];
    for group in groups {
        lines.push(group.name().to_string());
        for type_name in group.type_names() {
            lines.push(format!("  {}", type_name));
        }
    }
    lines
}

fn key_label(args: &TableResourceArgs, name: &str) -> String {
    match args.attribute(name) {
        Some(attribute) => format!("{} ({})", name, attribute.storage_type),
        None => name.to_string(),
    }
}

fn format_throughput(capacity: &ThroughputArgs) -> String {
    format!("read {}, write {}", capacity.read, capacity.write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablegen_core::model::StorageType;
    use tablegen_core::table::AttributeArgs;

    fn plan() -> TablePlan {
        TablePlan {
            table: "TestTable".to_string(),
            members: vec!["Table".to_string(), "TableKindOne".to_string()],
            args: TableResourceArgs {
                name: Some("TestTable".to_string()),
                attributes: vec![
                    AttributeArgs {
                        name: "TestHashKey".to_string(),
                        storage_type: StorageType::String,
                    },
                    AttributeArgs {
                        name: "NumberAttribute".to_string(),
                        storage_type: StorageType::Number,
                    },
                ],
                hash_key: Some("TestHashKey".to_string()),
                range_key: None,
                billing_mode: Some(BillingMode::Provisioned),
                capacity: Some(ThroughputArgs { read: 10, write: 5 }),
                global_secondary_indexes: vec![GlobalSecondaryIndexArgs {
                    name: "GlobalIndexOne".to_string(),
                    hash_key: "NumberAttribute".to_string(),
                    range_key: None,
                    projection_type: ProjectionType::KeysOnly,
                    non_key_attributes: Vec::new(),
                    capacity: Some(ThroughputArgs { read: 2, write: 1 }),
                }],
            },
        }
    }

    #[test]
    fn test_format_plan() {
        let lines = format_plan(&plan());

        assert_eq!(
            lines,
            vec![
                "+ Table: TestTable",
                "  Types: Table, TableKindOne",
                "  Partition key: TestHashKey (S)",
                "  Attributes: TestHashKey (S), NumberAttribute (N)",
                "  Billing: PROVISIONED (read 10, write 5)",
                "  + GSI: GlobalIndexOne",
                "    Partition key: NumberAttribute (N)",
                "    Projection: KEYS_ONLY",
                "    Throughput: read 2, write 1",
            ]
        );
    }

    #[test]
    fn test_format_plan_include_projection() {
        let mut plan = plan();
        plan.args.billing_mode = Some(BillingMode::PayPerRequest);
        plan.args.capacity = None;
        let index = &mut plan.args.global_secondary_indexes[0];
        index.projection_type = ProjectionType::Include;
        index.non_key_attributes = vec!["TestHashKey".to_string()];
        index.capacity = None;

        let lines = format_plan(&plan);

        assert!(lines.contains(&"  Billing: PAY_PER_REQUEST".to_string()));
        assert!(lines.contains(&"    Projection: INCLUDE [TestHashKey]".to_string()));
        assert!(!lines.iter().any(|line| line.contains("Throughput")));
    }

    #[test]
    fn test_format_groups() {
        let groups = vec![TableGroup::new(
            "TestTable",
            vec![tablegen_core::model::TypeDescriptor::new("Table")],
        )
        .unwrap()];

        let lines = format_groups(&groups);

        assert_eq!(lines[0], "TABLES (1)");
        assert_eq!(lines[2], "TestTable");
        assert_eq!(lines[3], "  Table");
    }

    #[test]
    fn test_format_groups_empty() {
        assert_eq!(format_groups(&[]), vec!["No tables found.".to_string()]);
    }
}
