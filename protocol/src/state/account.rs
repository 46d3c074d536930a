//! The bank-account record: a counterparty's financial standing, used to
//! gate purchases and loans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::amount::Amount;
use crate::crypto::PublicKey;
use crate::identity::{AbstractParty, AnonymousParty, PartyAndReference};
use crate::transaction::Command;

/// A counterparty's account as issued by a bank.
///
/// `balance.token` is fixed at issuance and `maturity_date` never moves
/// backwards. Ownership may be reassigned (`Move`); the account is consumed
/// entirely once it matures (`Redeem`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountState {
    pub owner: AnonymousParty,
    pub issuance: PartyAndReference,
    pub balance: Amount,
    pub maturity_date: DateTime<Utc>,
    pub is_employed: bool,
    pub age: u32,
    pub account_number: String,
    pub account_name: String,
    /// Outstanding loan, if one has been granted against this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<u64>,
}

impl AccountState {
    /// The account holder is the only participant.
    pub fn participants(&self) -> Vec<AbstractParty> {
        vec![AbstractParty::from(self.owner)]
    }

    pub fn participant_keys(&self) -> BTreeSet<PublicKey> {
        BTreeSet::from([self.owner.owning_key])
    }

    /// Copy of this account with the owner blanked to the null key.
    ///
    /// Two accounts with equal `without_owner()` values differ at most by
    /// owner, which is what groups a `Move` input with its output.
    pub fn without_owner(&self) -> Self {
        Self {
            owner: AnonymousParty::null(),
            ..self.clone()
        }
    }

    /// Reassigns the account, returning the command that justifies it.
    pub fn with_new_owner(&self, new_owner: AnonymousParty) -> (Command, AccountState) {
        (
            Command::Move,
            Self {
                owner: new_owner,
                ..self.clone()
            },
        )
    }
}
