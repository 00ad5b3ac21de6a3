use clap::Parser;
use directroute::cli::{run_cli, Cli};
use directroute::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    run_cli(cli)
}
