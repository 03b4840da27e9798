//! Synthesis of table resource arguments from a group of type descriptors.
//!
//! Each operation fills in one facet of a `TableResourceArgs`. Attribute
//! declarations are only ever merged in, de-duplicated by exact name, so
//! the operations can run in any order and any number of times.
//!
//! Precedence is group order throughout: the first member declaring
//! capacity, a hash key or indexes is the one used. Later members that
//! disagree are handled by the builder's `ConflictPolicy`.

use crate::error::{ConfigurationError, Result};
use crate::model::{Capacity, Field, IndexDescriptor, ProjectionType, TypeDescriptor};
use crate::table::args::{
    AttributeArgs, BillingMode, GlobalSecondaryIndexArgs, TableResourceArgs, ThroughputArgs,
};
use crate::table::group::TableGroup;
use crate::table::policy::ConflictPolicy;

/// Builds the provisioning arguments of one table.
///
/// # Examples
///
/// ```
/// use tablegen_core::model::{StorageType, TypeDescriptor};
/// use tablegen_core::table::{BillingMode, TableGroup, TableResourceArgs, TableResourceBuilder};
///
/// let group = TableGroup::new(
///     "Orders",
///     vec![TypeDescriptor::new("Order")
///         .with_hash_key("OrderId", StorageType::String)
///         .with_capacity(10, 5)],
/// )
/// .unwrap();
/// let builder = TableResourceBuilder::new(group);
///
/// let mut args = TableResourceArgs::new();
/// builder
///     .set_key_schema(&mut args)
///     .unwrap()
///     .set_billing_mode(&mut args)
///     .unwrap();
///
/// assert_eq!(args.hash_key.as_deref(), Some("OrderId"));
/// assert_eq!(args.billing_mode, Some(BillingMode::Provisioned));
/// ```
#[derive(Debug, Clone)]
pub struct TableResourceBuilder {
    group: TableGroup,
    policy: ConflictPolicy,
}

impl TableResourceBuilder {
    pub fn new(group: TableGroup) -> Self {
        Self {
            group,
            policy: ConflictPolicy::default(),
        }
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table_name(&self) -> &str {
        self.group.name()
    }

    pub fn group(&self) -> &TableGroup {
        &self.group
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Runs every operation on fresh arguments.
    pub fn build(&self) -> Result<TableResourceArgs> {
        let mut args = TableResourceArgs::new();
        self.set_table_name(&mut args)
            .set_key_schema(&mut args)?
            .set_attribute_schema(&mut args)?
            .set_billing_mode(&mut args)?
            .set_global_secondary_indexes(&mut args)?;

        tracing::debug!(
            table = %self.table_name(),
            attributes = args.attributes.len(),
            indexes = args.global_secondary_indexes.len(),
            "Built table resource arguments"
        );
        Ok(args)
    }

    pub fn set_table_name(&self, args: &mut TableResourceArgs) -> &Self {
        args.name = Some(self.table_name().to_string());
        self
    }

    /// Merges the union of every member's fields into the attribute list.
    ///
    /// Names already present are kept as they are.
    pub fn set_attribute_schema(&self, args: &mut TableResourceArgs) -> Result<&Self> {
        let fields = self
            .group
            .descriptors()
            .iter()
            .flat_map(|descriptor| descriptor.fields.iter());
        let staged = self.new_attributes(args, fields)?;
        args.attributes.extend(staged);
        Ok(self)
    }

    /// Sets the billing mode from the first member declaring capacity.
    ///
    /// Without any declaration the table is billed on demand and carries no
    /// capacity numbers.
    pub fn set_billing_mode(&self, args: &mut TableResourceArgs) -> Result<&Self> {
        let mut declared = self
            .group
            .descriptors()
            .iter()
            .filter_map(|descriptor| descriptor.capacity.map(|capacity| (descriptor, capacity)));

        let Some((owner, capacity)) = declared.next() else {
            tracing::debug!(table = %self.table_name(), "No capacity declared, billing on demand");
            args.billing_mode = Some(BillingMode::PayPerRequest);
            args.capacity = None;
            return Ok(self);
        };

        let throughput = self.throughput(capacity, "table")?;

        for (other, other_capacity) in declared {
            if other_capacity != capacity {
                self.policy.resolve(ConfigurationError::ConflictingCapacity {
                    table: self.table_name().to_string(),
                    first: owner.type_name.clone(),
                    other: other.type_name.clone(),
                })?;
            }
        }

        tracing::debug!(
            table = %self.table_name(),
            owner = %owner.type_name,
            read = throughput.read,
            write = throughput.write,
            "Provisioned billing"
        );
        args.billing_mode = Some(BillingMode::Provisioned);
        args.capacity = Some(throughput);
        Ok(self)
    }

    /// Sets the primary key from the first member declaring a hash key.
    ///
    /// The range key comes from that same member. Both key attributes are
    /// merged into the attribute list.
    pub fn set_key_schema(&self, args: &mut TableResourceArgs) -> Result<&Self> {
        let descriptors = self.group.descriptors();
        let (position, owner, hash_key) = descriptors
            .iter()
            .enumerate()
            .find_map(|(position, descriptor)| {
                descriptor
                    .hash_key
                    .as_ref()
                    .map(|hash_key| (position, descriptor, hash_key))
            })
            .ok_or_else(|| ConfigurationError::MissingHashKey {
                table: self.table_name().to_string(),
            })?;

        let key_fields: Vec<&Field> = std::iter::once(hash_key)
            .chain(owner.range_key.as_ref())
            .collect();
        for key in &key_fields {
            self.ensure_scalar(key)?;
        }

        for other in descriptors[position + 1..]
            .iter()
            .filter(|other| other.hash_key.is_some())
        {
            if key_names(other) != key_names(owner) {
                self.policy.resolve(ConfigurationError::ConflictingKeySchema {
                    table: self.table_name().to_string(),
                    first: owner.type_name.clone(),
                    other: other.type_name.clone(),
                })?;
            }
        }

        let staged = self.new_attributes(args, key_fields)?;
        args.hash_key = Some(hash_key.name.clone());
        args.range_key = owner.range_key.as_ref().map(|range| range.name.clone());
        args.attributes.extend(staged);

        tracing::debug!(
            table = %self.table_name(),
            owner = %owner.type_name,
            hash_key = %hash_key.name,
            "Key schema set"
        );
        Ok(self)
    }

    /// Emits the indexes of the first member declaring any.
    ///
    /// Index records are merged by name. Every distinct index key is merged
    /// into the attribute list.
    pub fn set_global_secondary_indexes(&self, args: &mut TableResourceArgs) -> Result<&Self> {
        let descriptors = self.group.descriptors();
        let Some(position) = descriptors
            .iter()
            .position(|descriptor| !descriptor.global_indexes.is_empty())
        else {
            return Ok(self);
        };
        let owner = &descriptors[position];

        for other in descriptors[position + 1..]
            .iter()
            .filter(|other| !other.global_indexes.is_empty())
        {
            self.policy.resolve(ConfigurationError::MultipleIndexOwners {
                table: self.table_name().to_string(),
                owner: owner.type_name.clone(),
                other: other.type_name.clone(),
            })?;
        }

        let mut records: Vec<GlobalSecondaryIndexArgs> = Vec::new();
        let mut key_fields: Vec<&Field> = Vec::new();
        for index in &owner.global_indexes {
            if records.iter().any(|record| record.name == index.name) {
                return Err(ConfigurationError::DuplicateIndex {
                    table: self.table_name().to_string(),
                    index: index.name.clone(),
                    type_name: owner.type_name.clone(),
                });
            }
            for key in index.key_fields() {
                if owner.field(&key.name).is_none() {
                    return Err(ConfigurationError::UnknownIndexKey {
                        table: self.table_name().to_string(),
                        index: index.name.clone(),
                        field: key.name.clone(),
                        type_name: owner.type_name.clone(),
                    });
                }
                self.ensure_scalar(key)?;
                if !key_fields.iter().any(|known| known.name == key.name) {
                    key_fields.push(key);
                }
            }
            records.push(self.index_args(index)?);
        }

        let staged = self.new_attributes(args, key_fields)?;
        for record in records {
            match args
                .global_secondary_indexes
                .iter_mut()
                .find(|existing| existing.name == record.name)
            {
                Some(existing) => *existing = record,
                None => args.global_secondary_indexes.push(record),
            }
        }
        args.attributes.extend(staged);

        tracing::debug!(
            table = %self.table_name(),
            owner = %owner.type_name,
            indexes = owner.global_indexes.len(),
            "Global secondary indexes set"
        );
        Ok(self)
    }

    fn index_args(&self, index: &IndexDescriptor) -> Result<GlobalSecondaryIndexArgs> {
        let capacity = match index.capacity {
            Some(capacity) => Some(self.throughput(capacity, &format!("index '{}'", index.name))?),
            None => None,
        };

        Ok(GlobalSecondaryIndexArgs {
            name: index.name.clone(),
            hash_key: index.hash_key.name.clone(),
            range_key: index.range_key.as_ref().map(|range| range.name.clone()),
            projection_type: index.projection,
            non_key_attributes: non_key_attributes(index),
            capacity,
        })
    }

    /// Attributes to append for `fields`, skipping names already declared.
    ///
    /// Nothing is written here, so a rejected conflict leaves `args` as it
    /// was.
    fn new_attributes<'f, I>(
        &self,
        args: &TableResourceArgs,
        fields: I,
    ) -> Result<Vec<AttributeArgs>>
    where
        I: IntoIterator<Item = &'f Field>,
    {
        let mut staged: Vec<AttributeArgs> = Vec::new();
        for field in fields {
            let existing = args
                .attribute(&field.name)
                .or_else(|| staged.iter().find(|attribute| attribute.name == field.name));
            match existing {
                Some(existing) if existing.storage_type != field.storage_type => {
                    self.policy
                        .resolve(ConfigurationError::ConflictingAttributeType {
                            table: self.table_name().to_string(),
                            attribute: field.name.clone(),
                            existing: existing.storage_type,
                            declared: field.storage_type,
                        })?;
                }
                Some(_) => {}
                None => staged.push(AttributeArgs::from(field)),
            }
        }
        Ok(staged)
    }

    fn ensure_scalar(&self, key: &Field) -> Result<()> {
        if key.storage_type.is_scalar() {
            Ok(())
        } else {
            Err(ConfigurationError::NonScalarKey {
                table: self.table_name().to_string(),
                field: key.name.clone(),
                storage_type: key.storage_type,
            })
        }
    }

    /// Converts declared units, rejecting zero and values the engine cannot hold.
    fn throughput(&self, capacity: Capacity, target: &str) -> Result<ThroughputArgs> {
        let convert = |units: u64| -> Result<i64> {
            i64::try_from(units)
                .ok()
                .filter(|&units| units > 0)
                .ok_or_else(|| ConfigurationError::CapacityOutOfRange {
                    table: self.table_name().to_string(),
                    target: target.to_string(),
                    units,
                })
        };

        Ok(ThroughputArgs {
            read: convert(capacity.read)?,
            write: convert(capacity.write)?,
        })
    }
}

fn key_names(descriptor: &TypeDescriptor) -> (Option<&str>, Option<&str>) {
    (
        descriptor.hash_key.as_ref().map(|key| key.name.as_str()),
        descriptor.range_key.as_ref().map(|key| key.name.as_str()),
    )
}

/// Projected non-key attributes; the index keys are always projected.
fn non_key_attributes(index: &IndexDescriptor) -> Vec<String> {
    if index.projection != ProjectionType::Include {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::new();
    for name in &index.projected_fields {
        let is_key = index.key_fields().any(|key| &key.name == name);
        if !is_key && !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}
