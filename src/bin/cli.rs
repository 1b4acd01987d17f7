// src/bin/cli.rs
use clap::Parser;
use eci_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();

    let log_file = args.log_file.clone().or_else(|| (args.verbose > 1).then(log::default_log_file));
    let _guard = log::init_logging(args.verbose, log_file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("logging setup failed: {e}"))?;

    cli::run(args)
}
