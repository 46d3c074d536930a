//! State transitions as free functions.
//!
//! Each function derives the next version of a state and returns it
//! together with the command that justifies it. They refuse transitions
//! that could never validate, but the contract remains the authority: a
//! transaction assembled by hand goes through the same rules.

use thiserror::Error;

use rems_protocol::identity::{AnonymousParty, Party};
use rems_protocol::state::{AccountState, PropertyState};
use rems_protocol::transaction::Command;

/// Transitions that cannot be expressed from the given state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("the buyer already owns this property")]
    SameOwner,

    #[error("the buyer is the current tenant")]
    BuyerIsTenant,

    #[error("the property is already rented")]
    AlreadyRented,

    #[error("the property is not rented")]
    NotRented,

    #[error("the owner cannot rent their own property")]
    TenantIsOwner,
}

/// A freshly registered property: new id, no tenant.
pub fn register(owner: Party, value: u64, address: impl Into<String>) -> (Command, PropertyState) {
    (Command::Register, PropertyState::new(owner, value, address))
}

fn transfer(
    command: Command,
    property: &PropertyState,
    buyer: Party,
) -> Result<(Command, PropertyState), TransitionError> {
    if property.owner.owning_key == buyer.owning_key {
        return Err(TransitionError::SameOwner);
    }
    if property.tenant.as_ref().map(|tenant| tenant.owning_key) == Some(buyer.owning_key) {
        return Err(TransitionError::BuyerIsTenant);
    }
    Ok((command, property.with_owner(buyer)))
}

/// Transfers `property` to `buyer`, paid from the buyer's own balance.
pub fn sell(property: &PropertyState, buyer: Party) -> Result<(Command, PropertyState), TransitionError> {
    transfer(Command::Sell, property, buyer)
}

/// Transfers `property` to `buyer`, paid with a loan-augmented balance.
pub fn sell_with_loan(
    property: &PropertyState,
    buyer: Party,
) -> Result<(Command, PropertyState), TransitionError> {
    transfer(Command::SellWithLoan, property, buyer)
}

pub fn rent(property: &PropertyState, tenant: Party) -> Result<(Command, PropertyState), TransitionError> {
    if property.is_rented() {
        return Err(TransitionError::AlreadyRented);
    }
    if property.owner.owning_key == tenant.owning_key {
        return Err(TransitionError::TenantIsOwner);
    }
    Ok((Command::Rent, property.with_tenant(Some(tenant))))
}

pub fn terminate_rent(property: &PropertyState) -> Result<(Command, PropertyState), TransitionError> {
    if !property.is_rented() {
        return Err(TransitionError::NotRented);
    }
    Ok((Command::TerminateRent, property.with_tenant(None)))
}

/// Reassigns a bank account.
pub fn move_account(account: &AccountState, new_owner: AnonymousParty) -> (Command, AccountState) {
    account.with_new_owner(new_owner)
}
