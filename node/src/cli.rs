//! # CLI Interface
//!
//! Defines the command-line argument structure for `rems-node` using
//! `clap` derive. Supports three subcommands: `verify`, `config`, and
//! `version`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// REMS transaction validator.
///
/// Reads JSON-encoded ledger transactions, runs them through the real
/// estate contract and prints one decision per transaction.
#[derive(Parser, Debug)]
#[command(
    name = "rems-node",
    about = "REMS transaction validator",
    version,
    propagate_version = true
)]
pub struct RemsNodeCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the REMS node binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the transactions in a JSON file.
    Verify(VerifyArgs),
    /// Print the effective engine configuration.
    Config(ConfigArgs),
    /// Print version information and exit.
    Version,
}

/// Engine configuration sources shared by `verify` and `config`.
#[derive(Parser, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Path to an engine configuration file (JSON).
    ///
    /// Fields missing from the file keep their protocol defaults.
    #[arg(long, short = 'c', env = "REMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Balance a loan-backed buyer must exceed.
    #[arg(long, env = "REMS_LOAN_FLOOR")]
    pub loan_floor: Option<u64>,

    /// Age a loan-backed buyer must exceed.
    #[arg(long, env = "REMS_MIN_AGE")]
    pub min_age: Option<u32>,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// File holding one transaction or a JSON array of transactions.
    pub file: PathBuf,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Log output format.
    #[arg(long, env = "REMS_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Print validation metrics in Prometheus text format after the run.
    #[arg(long)]
    pub metrics: bool,
}

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// `--log-format` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    Pretty,
    Json,
}
