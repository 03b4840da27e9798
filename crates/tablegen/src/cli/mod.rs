//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tablegen_core::ConflictPolicy;

/// Derive table provisioning arguments from declared type metadata.
#[derive(Debug, Parser)]
#[command(name = "tablegen")]
#[command(version, about = "Derive table provisioning arguments from type metadata", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// How disagreeing declarations within a table are handled.
    /// Overrides `TABLEGEN_CONFLICT_POLICY`.
    #[arg(long, global = true)]
    pub conflict_policy: Option<ConflictPolicy>,

    /// Emit every scalar attribute, not only the ones used by a key schema.
    #[arg(long, global = true)]
    pub all_attributes: bool,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging.
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output with colors.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build every table and show what would be provisioned.
    Plan {
        /// Declaration manifest (JSON).
        manifest: PathBuf,
    },
    /// Print the provisioning arguments of every table as JSON.
    Synth {
        /// Declaration manifest (JSON).
        manifest: PathBuf,
    },
    /// List discovered tables and their member types.
    Tables {
        /// Declaration manifest (JSON).
        manifest: PathBuf,
    },
}

impl Commands {
    pub fn manifest(&self) -> &PathBuf {
        match self {
            Commands::Plan { manifest }
            | Commands::Synth { manifest }
            | Commands::Tables { manifest } => manifest,
        }
    }
}
