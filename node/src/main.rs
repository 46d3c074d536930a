// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # REMS Validator Node
//!
//! Entry point for the `rems-node` binary. Parses CLI arguments, initializes
//! logging and metrics, and runs JSON-encoded transactions through the real
//! estate contract.
//!
//! The binary supports three subcommands:
//!
//! - `verify`  — validate one transaction or an array of them
//! - `config`  — print the effective engine configuration
//! - `version` — print build version information

mod cli;
mod config;
mod logging;
mod metrics;
mod verify;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use rems_contracts::RealEstateContract;

use cli::{Commands, RemsNodeCli};
use logging::LogFormat;
use metrics::ValidationMetrics;

const DEFAULT_LOG_FILTER: &str = "rems_node=info,rems_contracts=info,rems_protocol=warn";

fn main() -> Result<ExitCode> {
    let cli = RemsNodeCli::parse();

    match cli.command {
        Commands::Verify(args) => run_verify(args),
        Commands::Config(args) => {
            let config = config::resolve(&args.engine)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validates every transaction in the input file. Exits with failure when
/// at least one transaction was rejected.
fn run_verify(args: cli::VerifyArgs) -> Result<ExitCode> {
    logging::init_logging(DEFAULT_LOG_FILTER, LogFormat::from(args.log_format));

    let engine_config = config::resolve(&args.engine)?;
    let contract = RealEstateContract::new(engine_config);
    let metrics = ValidationMetrics::new().context("failed to register metrics")?;

    let txs = verify::load_transactions(&args.file)?;
    tracing::info!(
        file = %args.file.display(),
        count = txs.len(),
        program_id = %contract.config().program_id,
        "validating transactions"
    );

    let decisions = verify::verify_all(&contract, &txs, &metrics);
    for decision in &decisions {
        println!("{}", serde_json::to_string(decision)?);
    }

    let rejected = decisions.iter().filter(|d| !d.accepted).count();
    tracing::info!(
        accepted = decisions.len() - rejected,
        rejected,
        "validation finished"
    );

    if args.metrics {
        eprint!("{}", metrics.encode().context("failed to encode metrics")?);
    }

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints version information to stdout.
fn print_version() {
    println!("rems-node {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", rems_protocol::config::PROTOCOL_VERSION);
    println!("contract  {}", rems_protocol::config::PROGRAM_ID);
}
