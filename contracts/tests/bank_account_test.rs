//! Integration tests for the `Issue`, `Move` and `Redeem` commands.

mod common;

use common::*;
use rems_contracts::{generate_issue, generate_move, generate_redeem, AccountTerms};
use rems_contracts::{RealEstateContract, ValidationError};
use rems_protocol::state::{AccountState, CashState};
use rems_protocol::transaction::{Command, TimeWindow, TransactionBuilder};

fn violation(label: &str) -> Result<(), ValidationError> {
    Err(ValidationError::RuleViolation(label.into()))
}

/// An account owned by the buyer, maturing at [`maturity`].
fn held() -> AccountState {
    buyer_account(6_000)
}

/// The same account as freshly issued: still owned by the bank.
fn issued() -> AccountState {
    AccountState {
        owner: bank().anonymise(),
        ..held()
    }
}

fn before_maturity() -> TimeWindow {
    TimeWindow::until_only(maturity() - seconds(86_400))
}

fn issuance(output: AccountState) -> TransactionBuilder {
    TransactionBuilder::new()
        .command(Command::Issue)
        .output(output)
        .signer(bank().owning_key)
}

fn redemption(input: &AccountState) -> TransactionBuilder {
    TransactionBuilder::new()
        .command(Command::Redeem)
        .input(input.clone())
        .output(CashState::new(input.owner, input.balance.clone()))
        .signer(input.owner.owning_key)
}

// ---------------------------------------------------------------------------
// Issue
// ---------------------------------------------------------------------------

#[test]
fn issue_command_should_complete_successfully() {
    let tx = issuance(issued())
        .time_window(before_maturity())
        .build()
        .unwrap();
    assert_eq!(RealEstateContract::default().verify(&tx), Ok(()));
}

#[test]
fn issuances_must_be_timestamped() {
    let contract = RealEstateContract::default();
    let untimed = issuance(issued()).build().unwrap();
    assert_eq!(
        contract.verify(&untimed),
        Err(ValidationError::MissingTimeWindow("Issuances must be timestamped"))
    );

    // A lower bound alone says nothing about when the issuance happened by.
    let open_ended = issuance(issued())
        .time_window(TimeWindow::from_only(maturity() - seconds(86_400)))
        .build()
        .unwrap();
    assert_eq!(
        contract.verify(&open_ended),
        Err(ValidationError::MissingTimeWindow("Issuances must be timestamped"))
    );
}

#[test]
fn issuer_must_sign() {
    let tx = TransactionBuilder::new()
        .command(Command::Issue)
        .output(issued())
        .signer(buyer().owning_key)
        .time_window(before_maturity())
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("output states are issued by a command signer")
    );
}

#[test]
fn issued_balance_must_be_positive() {
    let mut empty = issued();
    empty.balance = eur(0);
    let tx = issuance(empty).time_window(before_maturity()).build().unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("output values sum to more than the inputs")
    );
}

#[test]
fn maturity_must_be_in_the_future() {
    let contract = RealEstateContract::default();
    for until in [maturity(), maturity() + seconds(1)] {
        let tx = issuance(issued())
            .time_window(TimeWindow::until_only(until))
            .build()
            .unwrap();
        assert_eq!(
            contract.verify(&tx),
            violation("the maturity date is not in the past")
        );
    }
}

#[test]
fn cannot_reissue_an_existing_state() {
    let tx = issuance(issued())
        .input(held())
        .time_window(before_maturity())
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("can't reissue an existing state")
    );
}

#[test]
fn issuing_several_accounts_is_malformed() {
    let tx = issuance(issued())
        .output(issued())
        .time_window(before_maturity())
        .build()
        .unwrap();
    assert!(matches!(
        RealEstateContract::default().verify(&tx),
        Err(ValidationError::MalformedTransaction(_))
    ));
}

#[test]
fn generated_issue_validates() {
    let terms = AccountTerms {
        maturity_date: maturity(),
        is_employed: true,
        age: 30,
        account_number: "BG80BNBG96611020345678".into(),
        account_name: "Jane Doe".into(),
        loan: None,
    };
    let tx = generate_issue(bank().reference(vec![1]), eur(6_000), terms, before_maturity())
        .build()
        .unwrap();
    assert_eq!(RealEstateContract::default().verify(&tx), Ok(()));
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

#[test]
fn move_command_should_complete_successfully() {
    let tx = generate_move(TransactionBuilder::new(), &issued(), buyer().anonymise())
        .build()
        .unwrap();
    assert_eq!(RealEstateContract::default().verify(&tx), Ok(()));
}

#[test]
fn move_must_be_signed_by_the_current_owner() {
    let account = issued();
    let tx = TransactionBuilder::new()
        .command(Command::Move)
        .input(account.clone())
        .output(account.with_new_owner(buyer().anonymise()).1)
        .signer(buyer().owning_key)
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("the transaction is signed by the owner of the bank account")
    );
}

#[test]
fn move_must_propagate_exactly_one_state() {
    let account = issued();
    let contract = RealEstateContract::default();

    let vanished = TransactionBuilder::new()
        .command(Command::Move)
        .input(account.clone())
        .signer(bank().owning_key)
        .build()
        .unwrap();
    assert_eq!(contract.verify(&vanished), violation("the state is propagated"));

    let duplicated = generate_move(TransactionBuilder::new(), &account, buyer().anonymise())
        .output(account.with_new_owner(anonymous(9)).1)
        .build()
        .unwrap();
    assert_eq!(contract.verify(&duplicated), violation("the state is propagated"));
}

#[test]
fn move_that_changes_more_than_the_owner_is_malformed() {
    let account = issued();
    let mut inflated = account.with_new_owner(buyer().anonymise()).1;
    inflated.balance = eur(1_000_000);
    let tx = TransactionBuilder::new()
        .command(Command::Move)
        .input(account)
        .output(inflated)
        .signer(bank().owning_key)
        .build()
        .unwrap();
    assert!(matches!(
        RealEstateContract::default().verify(&tx),
        Err(ValidationError::MalformedTransaction(_))
    ));
}

#[test]
fn moving_an_account_into_another_kind_of_state_is_malformed() {
    let account = held();
    let contract = RealEstateContract::default();

    let into_cash = TransactionBuilder::new()
        .command(Command::Move)
        .input(account.clone())
        .output(CashState::new(seller(), eur(999_999_999)))
        .signer(buyer().owning_key)
        .build()
        .unwrap();
    let into_property = TransactionBuilder::new()
        .command(Command::Move)
        .input(account)
        .output(real_estate())
        .signer(buyer().owning_key)
        .build()
        .unwrap();
    for tx in [into_cash, into_property] {
        assert!(matches!(
            contract.verify(&tx),
            Err(ValidationError::MalformedTransaction(reason)) if reason.contains("AccountState")
        ));
    }
}

// ---------------------------------------------------------------------------
// Redeem
// ---------------------------------------------------------------------------

#[test]
fn redeem_command_should_complete_successfully() {
    let tx = generate_redeem(TransactionBuilder::new(), &held(), maturity() + seconds(60))
        .build()
        .unwrap();
    assert_eq!(RealEstateContract::default().verify(&tx), Ok(()));
}

#[test]
fn redemptions_must_be_timestamped() {
    let contract = RealEstateContract::default();
    let untimed = redemption(&held()).build().unwrap();
    assert_eq!(
        contract.verify(&untimed),
        Err(ValidationError::MissingTimeWindow("Redemptions must be timestamped"))
    );

    let upper_bound_only = redemption(&held())
        .time_window(TimeWindow::until_only(maturity()))
        .build()
        .unwrap();
    assert_eq!(
        contract.verify(&upper_bound_only),
        Err(ValidationError::MissingTimeWindow("Redemptions must be timestamped"))
    );
}

#[test]
fn account_must_have_matured() {
    let contract = RealEstateContract::default();

    let early = redemption(&held())
        .time_window(TimeWindow::from_only(maturity() - seconds(1)))
        .build()
        .unwrap();
    assert_eq!(
        contract.verify(&early),
        violation("the bank account must have matured")
    );

    // At maturity exactly, the check passes and the payment is looked at next.
    let underpaid = TransactionBuilder::new()
        .command(Command::Redeem)
        .input(held())
        .output(CashState::new(held().owner, eur(5_999)))
        .signer(buyer().owning_key)
        .time_window(TimeWindow::from_only(maturity()))
        .build()
        .unwrap();
    assert_eq!(
        contract.verify(&underpaid),
        violation("the received amount equals the face value")
    );
}

#[test]
fn payment_must_reach_the_owner() {
    let tx = TransactionBuilder::new()
        .command(Command::Redeem)
        .input(held())
        .output(CashState::new(seller().anonymise(), eur(6_000)))
        .signer(buyer().owning_key)
        .time_window(TimeWindow::from_only(maturity()))
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("the received amount equals the face value")
    );
}

#[test]
fn payment_may_be_split_across_cash_states() {
    let tx = TransactionBuilder::new()
        .command(Command::Redeem)
        .input(held())
        .output(CashState::new(buyer().anonymise(), eur(4_000)))
        .output(CashState::new(buyer(), eur(2_000)))
        .signer(buyer().owning_key)
        .time_window(TimeWindow::from_only(maturity()))
        .build()
        .unwrap();
    assert_eq!(RealEstateContract::default().verify(&tx), Ok(()));
}

#[test]
fn account_must_be_destroyed() {
    let tx = redemption(&held())
        .output(held())
        .time_window(TimeWindow::from_only(maturity()))
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("the bank account must be destroyed")
    );
}

#[test]
fn redemption_must_be_signed_by_the_owner() {
    let account = held();
    let tx = TransactionBuilder::new()
        .command(Command::Redeem)
        .input(account.clone())
        .output(CashState::new(account.owner, account.balance.clone()))
        .signer(bank().owning_key)
        .time_window(TimeWindow::from_only(maturity()))
        .build()
        .unwrap();
    assert_eq!(
        RealEstateContract::default().verify(&tx),
        violation("the transaction is signed by the owner of the bank account")
    );
}

#[test]
fn redeeming_a_property_is_malformed() {
    let tx = TransactionBuilder::new()
        .command(Command::Redeem)
        .input(real_estate())
        .signer(seller().owning_key)
        .time_window(TimeWindow::from_only(maturity()))
        .build()
        .unwrap();
    assert!(matches!(
        RealEstateContract::default().verify(&tx),
        Err(ValidationError::MalformedTransaction(_))
    ));
}
