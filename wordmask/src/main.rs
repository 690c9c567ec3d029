// wordmask/src/main.rs
//! wordmask entry point.

use anyhow::Result;
use clap::Parser;

use wordmask::cli::{Cli, Commands};
use wordmask::commands::{sanitize::run_sanitize, scan::run_scan};
use wordmask::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    match &cli.command {
        Commands::Sanitize(cmd) => run_sanitize(cmd, cli.quiet),
        Commands::Scan(cmd) => run_scan(cmd),
    }
}
