//! # CLI Module
//!
//! Command-line access to direct route discovery: load a route manifest, run
//! discovery over every controller and print or check the result.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print the discovered route table:
//!
//! ```bash
//! directroute routes --manifest routes.yaml
//! directroute routes --manifest routes.yaml --format json
//! ```
//!
//! ### `check`
//!
//! Validate the manifest and run discovery without printing routes. Exits
//! non-zero on the first configuration error:
//!
//! ```bash
//! directroute check --manifest routes.toml
//! ```
//!
//! `--manifest` falls back to the `DIRECTROUTE_MANIFEST` environment variable.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use directroute::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{build_route_table, render_routes, run_cli, Cli, Commands, OutputFormat};
