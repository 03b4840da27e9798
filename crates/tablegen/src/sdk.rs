//! Mapping of table resource arguments to DynamoDB create-table requests.
//!
//! Pure conversions into SDK input types. Nothing here sends a request; the
//! resulting `CreateTableInput` is handed to whatever provisioning engine
//! applies it.

use aws_sdk_dynamodb::operation::create_table::CreateTableInput;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType, Projection,
    ProjectionType, ProvisionedThroughput, ScalarAttributeType,
};
use tablegen_core::model::{ProjectionType as IndexProjection, StorageType};
use tablegen_core::table::{
    BillingMode as TableBillingMode, GlobalSecondaryIndexArgs, TableResourceArgs, ThroughputArgs,
};

use crate::error::{Result, TablegenError};

/// Builds the create-table request for a fully built table.
///
/// With `key_attributes_only`, attribute definitions are limited to names
/// used by the table or an index key schema, which is all the service
/// accepts.
pub fn to_create_table_input(
    args: &TableResourceArgs,
    key_attributes_only: bool,
) -> Result<CreateTableInput> {
    let table_name = args
        .name
        .as_deref()
        .ok_or_else(|| TablegenError::Sdk("table has no name".to_string()))?;
    let hash_key = args.hash_key.as_deref().ok_or_else(|| {
        TablegenError::Sdk(format!("table '{}' has no hash key", table_name))
    })?;

    let mut request = CreateTableInput::builder()
        .table_name(table_name)
        .set_attribute_definitions(Some(attribute_definitions(args, key_attributes_only)?))
        .set_key_schema(Some(key_schema(hash_key, args.range_key.as_deref())?));

    match args.billing_mode {
        Some(TableBillingMode::PayPerRequest) => {
            request = request.billing_mode(BillingMode::PayPerRequest);
        }
        Some(TableBillingMode::Provisioned) => {
            request = request.billing_mode(BillingMode::Provisioned);
            if let Some(capacity) = &args.capacity {
                request = request.provisioned_throughput(provisioned_throughput(capacity)?);
            }
        }
        None => {}
    }

    for index in &args.global_secondary_indexes {
        request = request.global_secondary_indexes(global_secondary_index(index)?);
    }

    request.build().map_err(|e| TablegenError::Sdk(e.to_string()))
}

/// Attribute definitions for the scalar attributes of the table.
pub fn attribute_definitions(
    args: &TableResourceArgs,
    key_attributes_only: bool,
) -> Result<Vec<AttributeDefinition>> {
    let key_names = args.key_attribute_names();
    let mut definitions = Vec::new();

    for attribute in &args.attributes {
        if key_attributes_only && !key_names.contains(&attribute.name.as_str()) {
            continue;
        }
        let Some(attribute_type) = to_scalar_type(attribute.storage_type) else {
            tracing::debug!(
                attribute = %attribute.name,
                storage_type = %attribute.storage_type,
                "Skipping non-scalar attribute definition"
            );
            continue;
        };
        definitions.push(
            AttributeDefinition::builder()
                .attribute_name(&attribute.name)
                .attribute_type(attribute_type)
                .build()
                .map_err(|e| TablegenError::Sdk(e.to_string()))?,
        );
    }

    Ok(definitions)
}

/// Hash key element first, then the optional range key element.
pub fn key_schema(hash_key: &str, range_key: Option<&str>) -> Result<Vec<KeySchemaElement>> {
    let mut key_schema = vec![KeySchemaElement::builder()
        .attribute_name(hash_key)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| TablegenError::Sdk(e.to_string()))?];

    if let Some(range_key) = range_key {
        key_schema.push(
            KeySchemaElement::builder()
                .attribute_name(range_key)
                .key_type(KeyType::Range)
                .build()
                .map_err(|e| TablegenError::Sdk(e.to_string()))?,
        );
    }

    Ok(key_schema)
}

pub fn global_secondary_index(index: &GlobalSecondaryIndexArgs) -> Result<GlobalSecondaryIndex> {
    let projection = Projection::builder().projection_type(to_projection_type(index.projection_type));
    let projection = if index.non_key_attributes.is_empty() {
        projection.build()
    } else {
        projection
            .set_non_key_attributes(Some(index.non_key_attributes.clone()))
            .build()
    };

    let mut builder = GlobalSecondaryIndex::builder()
        .index_name(&index.name)
        .set_key_schema(Some(key_schema(&index.hash_key, index.range_key.as_deref())?))
        .projection(projection);

    if let Some(capacity) = &index.capacity {
        builder = builder.provisioned_throughput(provisioned_throughput(capacity)?);
    }

    builder.build().map_err(|e| TablegenError::Sdk(e.to_string()))
}

fn provisioned_throughput(capacity: &ThroughputArgs) -> Result<ProvisionedThroughput> {
    ProvisionedThroughput::builder()
        .read_capacity_units(capacity.read)
        .write_capacity_units(capacity.write)
        .build()
        .map_err(|e| TablegenError::Sdk(e.to_string()))
}

fn to_scalar_type(storage_type: StorageType) -> Option<ScalarAttributeType> {
    match storage_type {
        StorageType::String => Some(ScalarAttributeType::S),
        StorageType::Number => Some(ScalarAttributeType::N),
        StorageType::Binary => Some(ScalarAttributeType::B),
        _ => None,
    }
}

fn to_projection_type(projection: IndexProjection) -> ProjectionType {
    match projection {
        IndexProjection::All => ProjectionType::All,
        IndexProjection::KeysOnly => ProjectionType::KeysOnly,
        IndexProjection::Include => ProjectionType::Include,
    }
}
