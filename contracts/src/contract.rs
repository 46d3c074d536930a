//! # Real Estate Contract
//!
//! The validation engine's single entry point. [`RealEstateContract`]
//! dispatches on the command and runs the matching rule set. It owns
//! nothing but its configuration, so one instance can validate any number
//! of unrelated transactions, from any number of threads.

use rems_protocol::config::EngineConfig;
use rems_protocol::transaction::{Command, LedgerTransaction, TransactionView};
use tracing::debug;

use crate::bank_account::{verify_issue, verify_move, verify_redeem};
use crate::error::ValidationError;
use crate::real_estate::{
    verify_register, verify_rent, verify_sell, verify_sell_with_loan, verify_terminate_rent,
};

/// The contract governing property and bank-account states.
#[derive(Debug, Clone, Default)]
pub struct RealEstateContract {
    config: EngineConfig,
}

impl RealEstateContract {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Partitions a raw ledger transaction and validates it.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MalformedTransaction`] if the transaction cannot be
    /// partitioned (unknown command tag, too many states, an ungrouped
    /// move); otherwise whatever [`validate`](Self::validate) returns.
    pub fn verify(&self, tx: &LedgerTransaction) -> Result<(), ValidationError> {
        let view = TransactionView::from_ledger(tx)?;
        self.validate(&view)
    }

    /// Validates an already-partitioned transaction.
    ///
    /// The outcome is a pure function of `view` and the engine config.
    ///
    /// # Errors
    ///
    /// The first failing clause as a [`ValidationError`].
    pub fn validate(&self, view: &TransactionView<'_>) -> Result<(), ValidationError> {
        let result = match view.command {
            Command::Register => verify_register(view),
            Command::Sell => verify_sell(view),
            Command::SellWithLoan => verify_sell_with_loan(view, &self.config),
            Command::Rent => verify_rent(view),
            Command::TerminateRent => verify_terminate_rent(view),
            Command::Issue => verify_issue(view),
            Command::Move => verify_move(view),
            Command::Redeem => verify_redeem(view),
        };

        match &result {
            Ok(()) => debug!(command = %view.command, "transaction accepted"),
            Err(err) => debug!(command = %view.command, reason = %err, "transaction rejected"),
        }
        result
    }
}
