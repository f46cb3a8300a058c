//! navtree CLI Binary
//!
//! Command-line interface for inspecting folder comparison results.

use anyhow::Context;
use clap::Parser;
use navtree::logging::init_logging;
use navtree::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.config.clone()).context("Failed to load configuration")?;
    init_logging(Some(&context.logging_config(cli))).context("Failed to initialize logging")?;
    let output = context.execute(&cli.command)?;
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
