use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::direct::DefaultDirectRouteProvider;
use crate::manifest::load_manifest;
use crate::route::DefaultInlineConstraintResolver;
use crate::table::RouteTable;

/// Command-line interface for direct route discovery
#[derive(Debug, Parser)]
#[command(name = "directroute", version)]
#[command(about = "Discover and inspect direct routes from a route manifest", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the route table built from a manifest
    Routes {
        /// Path to the route manifest (YAML, JSON or TOML)
        #[arg(short, long, env = "DIRECTROUTE_MANIFEST")]
        manifest: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Validate a manifest and run discovery without printing routes
    Check {
        /// Path to the route manifest (YAML, JSON or TOML)
        #[arg(short, long, env = "DIRECTROUTE_MANIFEST")]
        manifest: PathBuf,
    },
}

/// How `routes` prints the table
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    /// Pretty-printed JSON array of route summaries
    Json,
}

/// Load `path` and build its route table with the default provider and resolver.
pub fn build_route_table(path: &Path) -> anyhow::Result<RouteTable> {
    let manifest = load_manifest(path)?;
    let registrations = manifest.registrations();
    RouteTable::build(
        &registrations,
        &DefaultDirectRouteProvider,
        &DefaultInlineConstraintResolver,
    )
    .with_context(|| format!("direct route discovery failed for {}", path.display()))
}

/// Render the table in the requested format.
pub fn render_routes(table: &RouteTable, format: OutputFormat) -> anyhow::Result<String> {
    let summaries = table.summaries();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Table => {
            let rows: Vec<[String; 4]> = summaries
                .iter()
                .map(|s| {
                    let target = if s.target_is_action {
                        format!("{}.{}", s.controller, s.actions.join(","))
                    } else {
                        format!("{}.[{}]", s.controller, s.actions.join(","))
                    };
                    [
                        s.order.to_string(),
                        s.name.clone().unwrap_or_else(|| "-".to_string()),
                        s.route_template.clone(),
                        target,
                    ]
                })
                .collect();

            let header = ["ORDER", "NAME", "TEMPLATE", "TARGET"];
            let mut widths = header.map(str::len);
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.len());
                }
            }

            let mut out = String::new();
            let header_row = header.map(str::to_string);
            for row in std::iter::once(&header_row).chain(&rows) {
                let line = row
                    .iter()
                    .zip(widths)
                    .map(|(cell, width)| format!("{cell:<width$}"))
                    .collect::<Vec<_>>()
                    .join("  ");
                writeln!(out, "{}", line.trim_end())?;
            }
            Ok(out)
        }
    }
}

/// Run the parsed command.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Routes { manifest, format } => {
            let table = build_route_table(&manifest)?;
            print!("{}", render_routes(&table, format)?);
        }
        Commands::Check { manifest } => {
            let table = build_route_table(&manifest)?;
            info!(manifest = %manifest.display(), routes_count = table.len(), "Manifest OK");
            println!("{}: OK ({} routes)", manifest.display(), table.len());
        }
    }
    Ok(())
}
