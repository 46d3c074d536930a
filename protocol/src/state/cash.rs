//! Cash states and the aggregation used when an account is redeemed.

use serde::{Deserialize, Serialize};

use super::amount::{Amount, AmountError};
use crate::crypto::PublicKey;
use crate::identity::AbstractParty;

/// On-ledger cash: an amount payable to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashState {
    pub owner: AbstractParty,
    pub amount: Amount,
}

impl CashState {
    pub fn new(owner: impl Into<AbstractParty>, amount: Amount) -> Self {
        Self {
            owner: owner.into(),
            amount,
        }
    }

    /// The owner is the only participant.
    pub fn participants(&self) -> Vec<&AbstractParty> {
        vec![&self.owner]
    }
}

/// Sums every cash state owned by `owner`.
///
/// Returns `Ok(None)` when nothing is payable to the owner.
///
/// # Errors
///
/// [`AmountError::TokenMismatch`] if the owner is paid in more than one
/// token, [`AmountError::Overflow`] if the total does not fit.
pub fn sum_cash_by<'a, I>(cash: I, owner: &PublicKey) -> Result<Option<Amount>, AmountError>
where
    I: IntoIterator<Item = &'a CashState>,
{
    Amount::sum(
        cash.into_iter()
            .filter(|state| state.owner.owning_key() == *owner)
            .map(|state| &state.amount),
    )
}
