//! `licensecheck` — scan installed `node_modules`, classify licenses, and gate CI on the result.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load policy config and merge its deny list with `--deny` ([`config::load_config`]).
//! 3. Walk `node_modules` and read each `package.json` ([`scanner`]).
//! 4. Classify licenses and count them ([`license`], [`checker::check_licenses`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0` (clean) or `1` (copyleft, unknown or denied licenses present).

mod checker;
mod cli;
mod config;
mod license;
mod models;
mod report;
mod scanner;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use checker::check_licenses;
use cli::{Cli, OutputMode};
use config::load_config;
use models::LicenseCheckOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;
    let options = LicenseCheckOptions {
        deny: config.deny_list(&cli.deny),
    };

    let result = check_licenses(&path, &options)?;
    let mode = cli.output_mode();

    if !cli.quiet && mode != OutputMode::Json {
        eprintln!(
            "  {} node_modules: {} packages",
            "→".cyan(),
            result.packages.len()
        );
        if !options.deny.is_empty() {
            eprintln!(
                "  {} deny: {}",
                "→".cyan(),
                options.deny.join(", ")
            );
        }
    }

    match mode {
        OutputMode::Json => println!("{}", report::json::render(&result)?),
        OutputMode::Summary => println!("{}", report::terminal::format_summary(&result)),
        OutputMode::Detailed => {
            println!("{}", report::terminal::format_detailed(&result, &options.deny))
        }
    }

    if result.has_issues {
        std::process::exit(1);
    }

    Ok(())
}
