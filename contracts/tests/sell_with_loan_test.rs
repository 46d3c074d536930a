//! Integration tests for the `SellWithLoan` command.

mod common;

use common::*;
use rems_contracts::{RealEstateContract, ValidationError};
use rems_protocol::config::EngineConfig;
use rems_protocol::state::{AccountState, PropertyState};
use rems_protocol::transaction::{Command, LedgerTransaction, TransactionBuilder};

fn violation(label: &str) -> Result<(), ValidationError> {
    Err(ValidationError::RuleViolation(label.into()))
}

fn loan_sale(input: &PropertyState, output: PropertyState, account: AccountState) -> LedgerTransaction {
    TransactionBuilder::new()
        .command(Command::SellWithLoan)
        .input(input.clone())
        .output(output)
        .output(account)
        .signers([seller().owning_key, buyer().owning_key])
        .build()
        .unwrap()
}

fn eligible() -> AccountState {
    account(&buyer(), 6_000, true, 30)
}

#[test]
fn sell_with_loan_command_should_complete_successfully() {
    let property = real_estate();
    let tx = loan_sale(&property, property.with_owner(buyer()), eligible());
    assert_eq!(RealEstateContract::default().verify(&tx), Ok(()));
}

#[test]
fn balance_must_exceed_the_eligibility_floor() {
    let property = real_estate();
    let contract = RealEstateContract::default();
    for balance in [4_000, 5_000] {
        let tx = loan_sale(
            &property,
            property.with_owner(buyer()),
            account(&buyer(), balance, true, 30),
        );
        assert_eq!(
            contract.verify(&tx),
            violation("Owner money is superior than 5000")
        );
    }
}

#[test]
fn buyer_must_be_employed() {
    let property = real_estate();
    let tx = loan_sale(
        &property,
        property.with_owner(buyer()),
        account(&buyer(), 6_000, false, 30),
    );
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("Owner has professional stability")
    );
}

#[test]
fn buyer_must_be_older_than_the_minimum_age() {
    let property = real_estate();
    let contract = RealEstateContract::default();
    for age in [18, 25] {
        let tx = loan_sale(
            &property,
            property.with_owner(buyer()),
            account(&buyer(), 6_000, true, age),
        );
        assert_eq!(
            contract.verify(&tx),
            violation("Owner has to be at least 25 years old")
        );
    }

    let tx = loan_sale(
        &property,
        property.with_owner(buyer()),
        account(&buyer(), 6_000, true, 26),
    );
    assert_eq!(contract.verify(&tx), Ok(()));
}

#[test]
fn eligibility_is_checked_in_order() {
    // Fails every eligibility clause; only the first is reported.
    let property = real_estate();
    let tx = loan_sale(
        &property,
        property.with_owner(buyer()),
        account(&buyer(), 100, false, 20),
    );
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("Owner money is superior than 5000")
    );
}

#[test]
fn eligible_buyer_must_still_afford_the_price() {
    let property = PropertyState::new(seller(), 10_000, ADDRESS);
    let tx = loan_sale(&property, property.with_owner(buyer()), eligible());
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("Buyer must have the amount greater than the real estate price")
    );
}

#[test]
fn only_the_owner_should_change() {
    let property = real_estate();
    let contract = RealEstateContract::default();

    let mut revalued = property.with_owner(buyer());
    revalued.value = 1;
    assert_eq!(
        contract.verify(&loan_sale(&property, revalued, eligible())),
        violation("Only the owner should change when buying a real estate")
    );

    assert_eq!(
        contract.verify(&loan_sale(&property, property.clone(), eligible())),
        violation("The owner should change when buying a real estate")
    );
}

#[test]
fn all_parties_should_sign() {
    let property = real_estate();
    let tx = TransactionBuilder::new()
        .command(Command::SellWithLoan)
        .input(property.clone())
        .output(property.with_owner(buyer()))
        .output(eligible())
        .signer(seller().owning_key)
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("All affected parties should sign the transaction when a real estate is being bought")
    );
}

#[test]
fn thresholds_come_from_the_engine_config() {
    let property = real_estate();
    let modest = account(&buyer(), 2_000, true, 20);
    let tx = loan_sale(&property, property.with_owner(buyer()), modest);

    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("Owner money is superior than 5000")
    );

    let lenient = RealEstateContract::new(
        EngineConfig::default()
            .with_loan_eligibility_floor(1_500)
            .with_min_borrower_age(18),
    );
    assert_eq!(lenient.verify(&tx), Ok(()));

    let strict_age = RealEstateContract::new(
        EngineConfig::default()
            .with_loan_eligibility_floor(1_500)
            .with_min_borrower_age(21),
    );
    assert_eq!(
        strict_age.verify(&tx),
        violation("Owner has to be at least 21 years old")
    );
}

#[test]
fn missing_account_is_malformed() {
    let property = real_estate();
    let tx = TransactionBuilder::new()
        .command(Command::SellWithLoan)
        .input(property.clone())
        .output(property.with_owner(buyer()))
        .signers([seller().owning_key, buyer().owning_key])
        .build()
        .unwrap();
    assert!(matches!(
        RealEstateContract::default().verify(&tx),
        Err(ValidationError::MalformedTransaction(_))
    ));
}
