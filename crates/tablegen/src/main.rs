//! tablegen CLI entry point.

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tablegen::cli::{Cli, Commands, OutputFormat};
use tablegen::output::{colorize, json::format_json, pretty};
use tablegen::prelude::*;
use tablegen::{build_plans, validate_requests, Config, Manifest, TablegenError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_filter = if cli.global.is_verbose() {
        "tablegen=debug,tablegen_core=debug"
    } else {
        "tablegen=info,tablegen_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().with_conflict_policy(cli.global.conflict_policy);
    if cli.global.all_attributes {
        config.key_attributes_only = false;
    }

    let manifest_path = cli.command.manifest().clone();
    let source_name = manifest_path.display().to_string();
    let registry = Manifest::from_path(&manifest_path)?.into_registry();

    match cli.command {
        Commands::Plan { .. } => {
            let plans = build_plans(&registry, &config, &source_name)?;
            validate_requests(&plans, &config)?;

            match cli.global.format {
                OutputFormat::Json => aprintln!("{}", format_json(&plans)?),
                OutputFormat::Pretty => {
                    if !cli.global.is_quiet() {
                        aprintln!("{} {}", p_b("Manifest:"), source_name);
                        aprintln!("{} {}", p_b("Conflict policy:"), config.conflict_policy);
                        aprintln!();
                        aprintln!("{}", p_c("Plan:"));
                    }
                    for plan in &plans {
                        for line in pretty::format_plan(plan) {
                            aprintln!("  {}", colorize(&line));
                        }
                        aprintln!();
                    }
                    if !cli.global.is_quiet() {
                        aprintln!("{}", p_g(&format!("{} table(s) ready.", plans.len())));
                    }
                }
            }
        }
        Commands::Synth { .. } => {
            let plans = build_plans(&registry, &config, &source_name)?;
            let args: Vec<_> = plans.iter().map(|plan| &plan.args).collect();
            aprintln!("{}", format_json(&args)?);
        }
        Commands::Tables { .. } => {
            let groups = registry.discover_tables();
            if groups.is_empty() {
                return Err(TablegenError::NoTables { source_name }.into());
            }

            match cli.global.format {
                OutputFormat::Json => {
                    let tables: Vec<_> = groups
                        .iter()
                        .map(|group| {
                            json!({
                                "table": group.name(),
                                "types": group.type_names().collect::<Vec<_>>(),
                            })
                        })
                        .collect();
                    aprintln!("{}", format_json(&tables)?);
                }
                OutputFormat::Pretty => {
                    for line in pretty::format_groups(&groups) {
                        aprintln!("{}", line);
                    }
                }
            }
        }
    }

    Ok(())
}
