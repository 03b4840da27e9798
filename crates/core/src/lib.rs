//! tablegen_core - derive key-value table provisioning arguments from
//! statically declared type metadata.
//!
//! Types are registered in a [`registry::TypeRegistry`], grouped per
//! physical table by [`discovery::discover`], and each group is turned into
//! [`table::TableResourceArgs`] by a [`table::TableResourceBuilder`].

pub mod discovery;
pub mod error;
pub mod model;
pub mod registry;
pub mod table;

pub use discovery::{discover, discover_builders};
pub use error::{ConfigurationError, Result};
pub use registry::{MetadataSource, TableEntity, TypeRegistry};
pub use table::{ConflictPolicy, TableGroup, TableResourceArgs, TableResourceBuilder};
