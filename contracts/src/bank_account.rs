//! Rule sets for bank-account transitions: `Issue`, `Move` and `Redeem`.

use rems_protocol::state::{sum_cash_by, AccountState};
use rems_protocol::transaction::TransactionView;
use tracing::debug;

use crate::clauses::{amount_matches, not_before, require, signed_by, single, strictly_before};
use crate::error::ValidationError;

const OWNER_SIGNED: &str = "the transaction is signed by the owner of the bank account";

/// The one and only consumed state, which must be an account.
fn sole_input_account<'a>(view: &TransactionView<'a>) -> Result<&'a AccountState, ValidationError> {
    if view.inputs.len() != 1 {
        return Err(ValidationError::MalformedTransaction(format!(
            "expected exactly one consumed state, found {}",
            view.inputs.len()
        )));
    }
    single(&view.inputs.accounts, "consumed AccountState")
}

/// `Move` counts, then insists the one output is an account. Account
/// outputs were already grouped with their inputs by everything but the
/// owner when the view was built; other kinds never join a group.
pub fn verify_move(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    let input = sole_input_account(view)?;
    require(signed_by(view.signers, &input.owner.owning_key), OWNER_SIGNED)?;
    require(view.outputs.len() == 1, "the state is propagated")?;
    single(&view.outputs.accounts, "produced AccountState").map(|_| ())
}

pub fn verify_redeem(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    let input = sole_input_account(view)?;
    let time = view
        .time_window
        .and_then(|window| window.from_time)
        .ok_or(ValidationError::MissingTimeWindow(
            "Redemptions must be timestamped",
        ))?;

    require(
        not_before(time, input.maturity_date),
        "the bank account must have matured",
    )?;

    let received = match sum_cash_by(view.outputs.cash.iter().copied(), &input.owner.owning_key) {
        Ok(total) => total,
        Err(err) => {
            debug!(error = %err, "cash paid to the owner does not aggregate");
            None
        }
    };
    require(
        amount_matches(received.as_ref(), &input.balance),
        "the received amount equals the face value",
    )?;
    require(
        view.outputs.accounts.is_empty() && view.outputs.properties.is_empty(),
        "the bank account must be destroyed",
    )?;
    require(signed_by(view.signers, &input.owner.owning_key), OWNER_SIGNED)
}

pub fn verify_issue(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    if view.outputs.len() != 1 {
        return Err(ValidationError::MalformedTransaction(format!(
            "expected exactly one produced state, found {}",
            view.outputs.len()
        )));
    }
    let output = single(&view.outputs.accounts, "produced AccountState")?;
    let time = view
        .time_window
        .and_then(|window| window.until_time)
        .ok_or(ValidationError::MissingTimeWindow(
            "Issuances must be timestamped",
        ))?;

    require(
        signed_by(view.signers, &output.issuance.party.owning_key()),
        "output states are issued by a command signer",
    )?;
    require(
        output.balance.quantity > 0,
        "output values sum to more than the inputs",
    )?;
    require(
        strictly_before(time, output.maturity_date),
        "the maturity date is not in the past",
    )?;
    require(view.inputs.is_empty(), "can't reissue an existing state")
}
