//! # State Module
//!
//! Immutable value types that live on the ledger.
//!
//! ```text
//! amount.rs   — Currency, Issued token, Amount with token-checked arithmetic
//! property.rs — PropertyState and its UniqueIdentifier
//! account.rs  — AccountState (the counterparty's bank account)
//! cash.rs     — CashState and sum_cash_by
//! ```
//!
//! A transaction carries states type-erased as [`ContractState`]. The
//! partition step in [`crate::transaction::view`] sorts them back into
//! typed groups before any rule looks at them.

pub mod account;
pub mod amount;
pub mod cash;
pub mod property;

pub use account::AccountState;
pub use amount::{Amount, AmountError, Currency, Issued};
pub use cash::{sum_cash_by, CashState};
pub use property::{PropertyState, UniqueIdentifier};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::crypto::PublicKey;
use crate::identity::AbstractParty;

/// Discriminant of a [`ContractState`], for logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Property,
    Account,
    Cash,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => write!(f, "PropertyState"),
            Self::Account => write!(f, "AccountState"),
            Self::Cash => write!(f, "CashState"),
        }
    }
}

/// Any state a REMS transaction may consume or produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContractState {
    Property(PropertyState),
    Account(AccountState),
    Cash(CashState),
}

impl ContractState {
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Property(_) => StateKind::Property,
            Self::Account(_) => StateKind::Account,
            Self::Cash(_) => StateKind::Cash,
        }
    }

    /// Owning keys of every participant of the wrapped state.
    pub fn participant_keys(&self) -> BTreeSet<PublicKey> {
        match self {
            Self::Property(state) => state.participant_keys(),
            Self::Account(state) => state.participant_keys(),
            Self::Cash(state) => state
                .participants()
                .into_iter()
                .map(AbstractParty::owning_key)
                .collect(),
        }
    }
}

impl From<PropertyState> for ContractState {
    fn from(state: PropertyState) -> Self {
        Self::Property(state)
    }
}

impl From<AccountState> for ContractState {
    fn from(state: AccountState) -> Self {
        Self::Account(state)
    }
}

impl From<CashState> for ContractState {
    fn from(state: CashState) -> Self {
        Self::Cash(state)
    }
}
