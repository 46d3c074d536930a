//! Rule sets for property transitions: `Register`, `Sell`, `SellWithLoan`,
//! `Rent` and `TerminateRent`.
//!
//! Clauses run in order and the first failure is the answer. Labels are
//! user-facing: they are what a rejected counterparty reads.

use rems_protocol::config::EngineConfig;
use rems_protocol::state::{AccountState, PropertyState};
use rems_protocol::transaction::TransactionView;

use crate::clauses::{
    covers_price, only_owner_changed, only_tenant_changed, require, signers_equal, single,
    transition_participants,
};
use crate::error::ValidationError;

/// The consumed and produced property of a one-to-one transition, once both
/// count clauses have passed.
fn property_pair<'a>(
    view: &TransactionView<'a>,
    consumed: &str,
    produced: &str,
) -> Result<(&'a PropertyState, &'a PropertyState), ValidationError> {
    if !view.inputs.cash.is_empty() || !view.outputs.cash.is_empty() {
        return Err(ValidationError::MalformedTransaction(
            "cash states are not part of a real estate transition".into(),
        ));
    }
    require(view.inputs.properties.len() == 1, consumed)?;
    require(view.outputs.properties.len() == 1, produced)?;
    Ok((view.inputs.properties[0], view.outputs.properties[0]))
}

/// The counterparty's post-transition account. At most one account may be
/// consumed alongside it.
fn paired_account<'a>(view: &TransactionView<'a>) -> Result<&'a AccountState, ValidationError> {
    if view.inputs.accounts.len() > 1 {
        return Err(ValidationError::MalformedTransaction(format!(
            "expected at most one consumed AccountState, found {}",
            view.inputs.accounts.len()
        )));
    }
    single(&view.outputs.accounts, "produced AccountState")
}

pub fn verify_register(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    require(
        view.inputs.is_empty(),
        "No input states should be consumed when registering a real estate",
    )?;
    require(
        view.outputs.len() == 1,
        "A single output state should be produced when registering a real estate",
    )?;
    let output = single(&view.outputs.properties, "produced PropertyState")?;
    require(
        output.tenant.is_none(),
        "There should be no tenant when registering a real estate",
    )?;
    require(
        signers_equal(view.signers, &output.participant_keys()),
        "The owner should sign the transaction when registering a real estate",
    )
}

/// Ownership clauses shared by `Sell` and `SellWithLoan`.
fn ownership_transferred(input: &PropertyState, output: &PropertyState) -> Result<(), ValidationError> {
    require(
        input.owner.owning_key != output.owner.owning_key,
        "The owner should change when buying a real estate",
    )?;
    require(
        only_owner_changed(input, output),
        "Only the owner should change when buying a real estate",
    )?;
    require(
        input.tenant.as_ref().map(|tenant| tenant.owning_key) != Some(output.owner.owning_key),
        "The tenant and the buyer should be different when buying a real estate",
    )
}

fn buyer_can_pay(account: &AccountState, property: &PropertyState) -> Result<(), ValidationError> {
    require(
        covers_price(&account.balance, property.value),
        "Buyer must have the amount greater than the real estate price",
    )
}

fn all_parties_signed(
    view: &TransactionView<'_>,
    input: &PropertyState,
    output: &PropertyState,
) -> Result<(), ValidationError> {
    require(
        signers_equal(view.signers, &transition_participants(input, output)),
        "All affected parties should sign the transaction when a real estate is being bought",
    )
}

pub fn verify_sell(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    let (input, output) = property_pair(
        view,
        "A single input state should be consumed when buying a real estate",
        "A single output state should be produced when buying a real estate",
    )?;
    ownership_transferred(input, output)?;
    let account = paired_account(view)?;
    buyer_can_pay(account, input)?;
    all_parties_signed(view, input, output)
}

/// Loan-backed purchase. The buyer must first be eligible for a loan; the
/// balance is then re-checked against the price. The account is expected
/// to already reflect any granted loan: nothing here computes one.
pub fn verify_sell_with_loan(
    view: &TransactionView<'_>,
    config: &EngineConfig,
) -> Result<(), ValidationError> {
    let (input, output) = property_pair(
        view,
        "A single input state should be consumed when buying a real estate",
        "A single output state should be produced when buying a real estate",
    )?;
    let account = paired_account(view)?;

    require(
        account.balance.quantity > config.loan_eligibility_floor,
        format!(
            "Owner money is superior than {}",
            config.loan_eligibility_floor
        ),
    )?;
    require(account.is_employed, "Owner has professional stability")?;
    require(
        account.age > config.min_borrower_age,
        format!(
            "Owner has to be at least {} years old",
            config.min_borrower_age
        ),
    )?;
    buyer_can_pay(account, input)?;

    ownership_transferred(input, output)?;
    all_parties_signed(view, input, output)
}

pub fn verify_rent(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    let (input, output) = property_pair(
        view,
        "A single input state should be consumed when renting a real estate",
        "A single output state should be produced when renting a real estate",
    )?;
    require(
        input.tenant.is_none(),
        "There should be no previous tenant when renting a real estate",
    )?;
    require(
        output.tenant.is_some(),
        "The tenant should change when renting a real estate",
    )?;
    require(
        only_tenant_changed(input, output),
        "Only the tenant should change when renting a real estate",
    )?;
    require(
        output.tenant.as_ref().map(|tenant| tenant.owning_key) != Some(output.owner.owning_key),
        "The owner and the tenant should be different when renting a real estate",
    )?;
    let account = paired_account(view)?;
    require(
        covers_price(&account.balance, input.value),
        "Buyer must have the amount greater than the real estate rent price",
    )?;
    require(
        signers_equal(view.signers, &transition_participants(input, output)),
        "Both owner and tenant should sign the transaction when renting a real estate",
    )
}

pub fn verify_terminate_rent(view: &TransactionView<'_>) -> Result<(), ValidationError> {
    let (input, output) = property_pair(
        view,
        "A single input state should be consumed when terminating a real estate rent",
        "A single output state should be produced when terminating a real estate rent",
    )?;
    if !view.inputs.accounts.is_empty() || !view.outputs.accounts.is_empty() {
        return Err(ValidationError::MalformedTransaction(
            "bank accounts are not part of terminating a rent".into(),
        ));
    }
    require(
        input.tenant.is_some(),
        "There should be a tenant before terminating a real estate rent",
    )?;
    require(
        output.tenant.is_none(),
        "The tenant should be removed when terminating a real estate rent",
    )?;
    require(
        only_tenant_changed(input, output),
        "Only the tenant should change when terminating a real estate rent",
    )?;
    require(
        signers_equal(view.signers, &transition_participants(input, output)),
        "Both owner and tenant should sign the transaction when terminating a real estate rent",
    )
}
