//! The partition step: from a raw [`LedgerTransaction`] to the typed
//! [`TransactionView`] the validation engine borrows.
//!
//! The rules never down-cast. Everything they see has already been sorted
//! into per-kind vectors here, and anything that cannot be sorted is a
//! [`ViewError`].

use std::collections::BTreeSet;
use thiserror::Error;
use tracing::trace;

use super::command::{Command, UnknownCommand};
use super::ledger::LedgerTransaction;
use super::time_window::TimeWindow;
use crate::config::MAX_TX_STATES;
use crate::crypto::PublicKey;
use crate::state::{AccountState, CashState, ContractState, PropertyState};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a ledger transaction cannot be projected into a view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error(transparent)]
    UnknownCommand(#[from] UnknownCommand),

    #[error("too many {side} states: {count} (max {max})")]
    TooManyStates {
        side: &'static str,
        count: usize,
        max: usize,
    },

    /// A moved account has no consumed counterpart that differs from it
    /// only by owner.
    #[error("account output {account_number:?} has no matching input differing only by owner")]
    UngroupedMove { account_number: String },
}

// ---------------------------------------------------------------------------
// StateGroups
// ---------------------------------------------------------------------------

/// States of one side of a transaction, sorted by kind. Order within each
/// kind is the order in the transaction.
#[derive(Debug, Clone, Default)]
pub struct StateGroups<'a> {
    pub properties: Vec<&'a PropertyState>,
    pub accounts: Vec<&'a AccountState>,
    pub cash: Vec<&'a CashState>,
}

impl<'a> StateGroups<'a> {
    pub fn partition(states: &'a [ContractState]) -> Self {
        let mut groups = Self::default();
        for state in states {
            match state {
                ContractState::Property(s) => groups.properties.push(s),
                ContractState::Account(s) => groups.accounts.push(s),
                ContractState::Cash(s) => groups.cash.push(s),
            }
        }
        groups
    }

    /// Total number of states across all kinds.
    pub fn len(&self) -> usize {
        self.properties.len() + self.accounts.len() + self.cash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Account grouping
// ---------------------------------------------------------------------------

/// Accounts on both sides of a transaction that are equal once the owner is
/// blanked out.
#[derive(Debug, Clone)]
pub struct AccountGroup<'a> {
    pub key: AccountState,
    pub inputs: Vec<&'a AccountState>,
    pub outputs: Vec<&'a AccountState>,
}

/// Groups consumed and produced accounts by [`AccountState::without_owner`].
pub fn group_accounts<'a>(
    inputs: &[&'a AccountState],
    outputs: &[&'a AccountState],
) -> Vec<AccountGroup<'a>> {
    let mut groups: Vec<AccountGroup<'a>> = Vec::new();
    let mut slot = |account: &'a AccountState, is_input: bool| {
        let key = account.without_owner();
        let index = match groups.iter().position(|g| g.key == key) {
            Some(index) => index,
            None => {
                groups.push(AccountGroup {
                    key,
                    inputs: Vec::new(),
                    outputs: Vec::new(),
                });
                groups.len() - 1
            }
        };
        if is_input {
            groups[index].inputs.push(account);
        } else {
            groups[index].outputs.push(account);
        }
    };
    for account in inputs {
        slot(*account, true);
    }
    for account in outputs {
        slot(*account, false);
    }
    groups
}

// ---------------------------------------------------------------------------
// TransactionView
// ---------------------------------------------------------------------------

/// Read-only, typed view of a transaction. Borrows the ledger transaction
/// for the duration of one validation call.
#[derive(Debug, Clone)]
pub struct TransactionView<'a> {
    pub inputs: StateGroups<'a>,
    pub outputs: StateGroups<'a>,
    pub command: Command,
    pub signers: &'a BTreeSet<PublicKey>,
    pub time_window: Option<&'a TimeWindow>,
}

impl<'a> TransactionView<'a> {
    /// Partitions `tx` into typed groups and parses its command tag.
    ///
    /// For `Move`, accounts are also grouped by everything but the owner; an
    /// output with no consumed counterpart is rejected here so the rule
    /// itself only has to count.
    ///
    /// # Errors
    ///
    /// See [`ViewError`].
    pub fn from_ledger(tx: &'a LedgerTransaction) -> Result<Self, ViewError> {
        let command = tx.command.command()?;

        for (side, states) in [("input", &tx.inputs), ("output", &tx.outputs)] {
            if states.len() > MAX_TX_STATES {
                return Err(ViewError::TooManyStates {
                    side,
                    count: states.len(),
                    max: MAX_TX_STATES,
                });
            }
        }

        let inputs = StateGroups::partition(&tx.inputs);
        let outputs = StateGroups::partition(&tx.outputs);

        if command == Command::Move {
            let groups = group_accounts(&inputs.accounts, &outputs.accounts);
            if let Some(orphan) = groups.iter().find(|g| g.inputs.is_empty()) {
                return Err(ViewError::UngroupedMove {
                    account_number: orphan.key.account_number.clone(),
                });
            }
        }

        trace!(
            %command,
            inputs = inputs.len(),
            outputs = outputs.len(),
            signers = tx.command.signers.len(),
            "partitioned transaction"
        );

        Ok(Self {
            inputs,
            outputs,
            command,
            signers: &tx.command.signers,
            time_window: tx.time_window.as_ref(),
        })
    }
}
