//! Batch validation of JSON-encoded ledger transactions.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Instant;

use rems_contracts::RealEstateContract;
use rems_protocol::transaction::LedgerTransaction;

use crate::metrics::ValidationMetrics;

/// The outcome for one transaction, printed as a JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub id: String,
    /// The command tag as it appeared on the wire.
    pub command: String,
    pub accepted: bool,
    pub error: Option<String>,
}

/// Reads a file holding either one transaction or an array of them.
pub fn load_transactions(path: &Path) -> Result<Vec<LedgerTransaction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read transactions from {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("transaction #{} in {} is malformed", index, path.display()))
            })
            .collect(),
        single => {
            let tx = serde_json::from_value(single)
                .with_context(|| format!("{} does not hold a transaction", path.display()))?;
            Ok(vec![tx])
        }
    }
}

/// Validates every transaction independently and in order.
pub fn verify_all(
    contract: &RealEstateContract,
    txs: &[LedgerTransaction],
    metrics: &ValidationMetrics,
) -> Vec<Decision> {
    txs.iter()
        .map(|tx| {
            let started = Instant::now();
            let result = contract.verify(tx);
            metrics.record(result.is_ok(), started.elapsed());

            let decision = Decision {
                id: tx.id(),
                command: tx.command.tag.clone(),
                accepted: result.is_ok(),
                error: result.as_ref().err().map(|err| err.to_string()),
            };
            match &result {
                Ok(()) => tracing::info!(id = %decision.id, command = %decision.command, "accepted"),
                Err(err) => tracing::warn!(
                    id = %decision.id,
                    command = %decision.command,
                    rule = err.is_rule_violation(),
                    reason = %err,
                    "rejected"
                ),
            }
            decision
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rems_protocol::crypto::Keypair;
    use rems_protocol::identity::Party;
    use rems_protocol::state::PropertyState;
    use rems_protocol::transaction::{Command, TransactionBuilder};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn register(signed: bool) -> LedgerTransaction {
        let owner = Party::new("O=John Doe, L=City, C=BG", Keypair::from_seed(&[1; 32]).public_key());
        let builder = TransactionBuilder::new()
            .command(Command::Register)
            .output(PropertyState::new(owner.clone(), 1_000, "City, Building 1"));
        let builder = if signed { builder.signer(owner.owning_key) } else { builder };
        builder.build().unwrap()
    }

    fn write_json(value: &impl Serialize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(value).unwrap().as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn loads_a_single_transaction() {
        let tx = register(true);
        let file = write_json(&tx);
        assert_eq!(load_transactions(file.path()).unwrap(), vec![tx]);
    }

    #[test]
    fn loads_an_array_of_transactions() {
        let txs = vec![register(true), register(false)];
        let file = write_json(&txs);
        assert_eq!(load_transactions(file.path()).unwrap(), txs);
    }

    #[test]
    fn reports_which_array_entry_is_malformed() {
        let file = write_json(&serde_json::json!([register(true), { "inputs": 3 }]));
        let err = load_transactions(file.path()).unwrap_err();
        assert!(err.to_string().contains("transaction #1"));
    }

    #[test]
    fn rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{").unwrap();
        assert!(load_transactions(file.path()).is_err());
    }

    #[test]
    fn decides_each_transaction() {
        let metrics = ValidationMetrics::new().unwrap();
        let txs = vec![register(true), register(false)];
        let decisions = verify_all(&RealEstateContract::default(), &txs, &metrics);

        assert_eq!(decisions.len(), 2);
        assert!(decisions[0].accepted);
        assert_eq!(decisions[0].error, None);
        assert_eq!(decisions[0].id, txs[0].id());
        assert_eq!(decisions[0].command, "Register");
        assert!(!decisions[1].accepted);
        assert_eq!(
            decisions[1].error.as_deref(),
            Some("The owner should sign the transaction when registering a real estate")
        );
        assert_eq!(metrics.validations_accepted_total.get(), 1);
        assert_eq!(metrics.validations_rejected_total.get(), 1);
    }

    #[test]
    fn unknown_commands_are_decided_not_dropped() {
        let mut tx = register(true);
        tx.command.tag = "Demolish".into();
        let metrics = ValidationMetrics::new().unwrap();
        let decisions = verify_all(&RealEstateContract::default(), &[tx], &metrics);
        assert!(!decisions[0].accepted);
        assert_eq!(decisions[0].command, "Demolish");
        assert!(decisions[0]
            .error
            .as_deref()
            .unwrap()
            .starts_with("malformed transaction"));
    }
}
