//! Engine configuration loading.
//!
//! Precedence, lowest first: protocol defaults, the JSON config file, then
//! CLI flags and their environment variables.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use rems_protocol::config::EngineConfig;

use crate::cli::EngineArgs;

/// Reads an [`EngineConfig`] from a JSON file.
pub fn load_file(path: &Path) -> Result<EngineConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid engine config in {}", path.display()))
}

/// Builds the effective engine configuration from all sources.
pub fn resolve(args: &EngineArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => load_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(floor) = args.loan_floor {
        config = config.with_loan_eligibility_floor(floor);
    }
    if let Some(age) = args.min_age {
        config = config.with_min_borrower_age(age);
    }
    tracing::debug!(
        loan_eligibility_floor = config.loan_eligibility_floor,
        min_borrower_age = config.min_borrower_age,
        "engine config resolved"
    );
    Ok(config)
}
