mod descriptor;
mod types;

pub use descriptor::{IndexDescriptor, TypeDescriptor};
pub use types::{Capacity, Field, ProjectionType, StorageType};
