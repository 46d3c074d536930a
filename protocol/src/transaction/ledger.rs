//! The raw ledger transaction, as it arrives from the network layer.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::command::CommandData;
use super::time_window::TimeWindow;
use crate::state::ContractState;

/// A fully materialised transaction: consumed and produced states (type
/// erased), the single command with its signer set, and an optional time
/// window.
///
/// This is what identity, propagation and storage layers hand to the
/// contract. It is deliberately dumb; [`super::view::TransactionView`] is the
/// typed projection the rules work on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    #[serde(default)]
    pub inputs: Vec<ContractState>,
    #[serde(default)]
    pub outputs: Vec<ContractState>,
    pub command: CommandData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
}

impl LedgerTransaction {
    /// Transaction ID: `hex(sha256(canonical JSON))`.
    ///
    /// Field order is fixed by the struct and signers are a sorted set, so
    /// the JSON form is canonical for a given value.
    pub fn id(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&bytes))
    }
}
