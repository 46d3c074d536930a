//! # Protocol Configuration & Constants
//!
//! Every magic number in REMS lives here. The validation engine never embeds
//! a threshold literal; it reads them from an [`EngineConfig`], which
//! defaults to the constants below.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Contract Identifiers
// ---------------------------------------------------------------------------

/// Identifier of the real-estate contract. States are bound to it when they
/// are added to a transaction.
pub const PROGRAM_ID: &str = "rems.RealEstateContract";

/// Protocol version string, surfaced by `rems-node version`.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Loan Eligibility
// ---------------------------------------------------------------------------

/// Minimum balance (exclusive) a buyer must hold before a loan-backed
/// purchase is considered.
pub const DEFAULT_LOAN_ELIGIBILITY_FLOOR: u64 = 5_000;

/// Minimum borrower age (exclusive) for a loan-backed purchase.
pub const DEFAULT_MIN_BORROWER_AGE: u32 = 25;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Maximum number of states on either side of a transaction. Keeps the
/// partition step bounded.
pub const MAX_TX_STATES: usize = 64;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Tunable thresholds held by the validation engine.
///
/// Deserializable so that nodes can load it from a JSON file; missing fields
/// fall back to the protocol defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Contract identifier the engine answers for.
    pub program_id: String,
    /// A loan-backed buyer's balance must be strictly above this.
    pub loan_eligibility_floor: u64,
    /// A loan-backed buyer's age must be strictly above this.
    pub min_borrower_age: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program_id: PROGRAM_ID.to_string(),
            loan_eligibility_floor: DEFAULT_LOAN_ELIGIBILITY_FLOOR,
            min_borrower_age: DEFAULT_MIN_BORROWER_AGE,
        }
    }
}

impl EngineConfig {
    /// Returns a copy with a different loan eligibility floor.
    pub fn with_loan_eligibility_floor(mut self, floor: u64) -> Self {
        self.loan_eligibility_floor = floor;
        self
    }

    /// Returns a copy with a different minimum borrower age.
    pub fn with_min_borrower_age(mut self, age: u32) -> Self {
        self.min_borrower_age = age;
        self
    }
}
