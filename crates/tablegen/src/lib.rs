//! tablegen - derive key-value table provisioning arguments from declared
//! type metadata.
//!
//! This is the Imperative Shell around `tablegen_core`: it reads declaration
//! manifests, loads configuration, maps built tables onto DynamoDB
//! create-table requests and formats output.

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod plan;
pub mod prelude;
pub mod sdk;

pub use config::Config;
pub use error::{Result, TablegenError};
pub use manifest::Manifest;
pub use plan::{build_plans, validate_requests, TablePlan};
