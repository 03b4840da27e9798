//! Table resource synthesis.
//!
//! This is part of the Functional Core - all operations are pure
//! transformations over in-memory arguments.

mod args;
mod builder;
mod group;
mod policy;

pub use args::{
    AttributeArgs, BillingMode, GlobalSecondaryIndexArgs, TableResourceArgs, ThroughputArgs,
};
pub use builder::TableResourceBuilder;
pub use group::TableGroup;
pub use policy::{ConflictPolicy, ParsePolicyError};
