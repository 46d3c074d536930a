//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] assembles a [`LedgerTransaction`] piece by
//! piece. It checks shape (a command is present, state counts are bounded)
//! but never legality; that is the contract's call.

use std::collections::BTreeSet;
use thiserror::Error;

use super::command::{Command, CommandData};
use super::ledger::LedgerTransaction;
use super::time_window::TimeWindow;
use crate::config::MAX_TX_STATES;
use crate::crypto::PublicKey;
use crate::state::ContractState;

/// Errors raised by [`TransactionBuilder::build`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("transaction has no command")]
    MissingCommand,

    #[error("too many states: {count} (max {max})")]
    TooManyStates { count: usize, max: usize },
}

/// Fluent builder for [`LedgerTransaction`] instances.
///
/// # Usage
///
/// ```rust
/// use rems_protocol::crypto::Keypair;
/// use rems_protocol::identity::Party;
/// use rems_protocol::state::PropertyState;
/// use rems_protocol::transaction::{Command, TransactionBuilder};
///
/// let owner = Party::new("O=John Doe, L=City, C=BG", Keypair::generate().public_key());
/// let tx = TransactionBuilder::new()
///     .command(Command::Register)
///     .output(PropertyState::new(owner.clone(), 1_000, "X"))
///     .signer(owner.owning_key)
///     .build()
///     .unwrap();
/// assert_eq!(tx.outputs.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    inputs: Vec<ContractState>,
    outputs: Vec<ContractState>,
    command: Option<Command>,
    signers: BTreeSet<PublicKey>,
    time_window: Option<TimeWindow>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command. A transaction carries exactly one, so a second
    /// call replaces the first.
    pub fn command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Adds a consumed state.
    pub fn input(mut self, state: impl Into<ContractState>) -> Self {
        self.inputs.push(state.into());
        self
    }

    /// Adds a produced state.
    pub fn output(mut self, state: impl Into<ContractState>) -> Self {
        self.outputs.push(state.into());
        self
    }

    /// Adds one signing key.
    pub fn signer(mut self, key: PublicKey) -> Self {
        self.signers.insert(key);
        self
    }

    /// Adds several signing keys.
    pub fn signers(mut self, keys: impl IntoIterator<Item = PublicKey>) -> Self {
        self.signers.extend(keys);
        self
    }

    pub fn time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Finalises the transaction.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingCommand`] if no command was set,
    /// [`BuildError::TooManyStates`] if either side exceeds
    /// [`MAX_TX_STATES`].
    pub fn build(self) -> Result<LedgerTransaction, BuildError> {
        let command = self.command.ok_or(BuildError::MissingCommand)?;
        let count = self.inputs.len().max(self.outputs.len());
        if count > MAX_TX_STATES {
            return Err(BuildError::TooManyStates {
                count,
                max: MAX_TX_STATES,
            });
        }
        Ok(LedgerTransaction {
            inputs: self.inputs,
            outputs: self.outputs,
            command: CommandData::new(command, self.signers),
            time_window: self.time_window,
        })
    }
}
