//! # Clause Library
//!
//! Small boolean predicates shared by every rule set, plus [`require`],
//! which turns a failed predicate into a labelled rejection. Keeping these
//! in one place keeps the invariants identical across commands: "only the
//! owner changed" means the same thing for `Sell` and `SellWithLoan`.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use rems_protocol::crypto::PublicKey;
use rems_protocol::state::{Amount, PropertyState};

use crate::error::ValidationError;

/// Fails with `label` unless `condition` holds.
pub fn require(condition: bool, label: impl Into<String>) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::RuleViolation(label.into()))
    }
}

/// Exactly one element of `states`, or a malformed-transaction error
/// naming what was expected.
pub fn single<'a, T>(states: &[&'a T], expected: &str) -> Result<&'a T, ValidationError> {
    match states {
        [only] => Ok(*only),
        _ => Err(ValidationError::MalformedTransaction(format!(
            "expected exactly one {}, found {}",
            expected,
            states.len()
        ))),
    }
}

// ---------------------------------------------------------------------------
// Signers
// ---------------------------------------------------------------------------

/// The signer set is exactly the required set: nobody missing, nobody extra.
pub fn signers_equal(signers: &BTreeSet<PublicKey>, required: &BTreeSet<PublicKey>) -> bool {
    signers == required
}

/// The signer set contains `key`.
pub fn signed_by(signers: &BTreeSet<PublicKey>, key: &PublicKey) -> bool {
    signers.contains(key)
}

/// Participants of a before/after pair of property states.
pub fn transition_participants(input: &PropertyState, output: &PropertyState) -> BTreeSet<PublicKey> {
    input
        .participant_keys()
        .union(&output.participant_keys())
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// Structural diff
// ---------------------------------------------------------------------------

/// `input` and `output` are equal once the output's owner is reset to the
/// input's owner.
pub fn only_owner_changed(input: &PropertyState, output: &PropertyState) -> bool {
    *input == output.with_owner(input.owner.clone())
}

/// `input` and `output` are equal once the output's tenant is reset to the
/// input's tenant.
pub fn only_tenant_changed(input: &PropertyState, output: &PropertyState) -> bool {
    *input == output.with_tenant(input.tenant.clone())
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// `instant` is at or after `bound`.
pub fn not_before(instant: DateTime<Utc>, bound: DateTime<Utc>) -> bool {
    instant >= bound
}

/// `instant` is strictly before `deadline`.
pub fn strictly_before(instant: DateTime<Utc>, deadline: DateTime<Utc>) -> bool {
    instant < deadline
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// `received` is present and equals `expected` in both token and quantity.
pub fn amount_matches(received: Option<&Amount>, expected: &Amount) -> bool {
    match received {
        Some(amount) => amount.same_token(expected) && amount.quantity == expected.quantity,
        None => false,
    }
}

/// A balance is enough to pay `price`.
pub fn covers_price(balance: &Amount, price: u64) -> bool {
    balance.quantity >= price
}
