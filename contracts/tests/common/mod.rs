//! Shared fixtures for the contract integration tests.
//!
//! Identities are derived from fixed seeds so that every test sees the same
//! keys for the same name.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use rems_protocol::crypto::Keypair;
use rems_protocol::identity::{AnonymousParty, Party};
use rems_protocol::state::{AccountState, Amount, Currency, Issued, PropertyState};

pub const ADDRESS: &str = "City, Test Residential Quarter, Building 1, Entrance A, No1";

pub fn identity(seed: u8, name: &str) -> Party {
    Party::new(name, Keypair::from_seed(&[seed; 32]).public_key())
}

pub fn seller() -> Party {
    identity(1, "O=John Doe, L=City, C=BG")
}

pub fn buyer() -> Party {
    identity(2, "O=Jane Doe, L=City, C=BG")
}

pub fn tenant() -> Party {
    identity(3, "O=Richard Roe, L=Town, C=BG")
}

pub fn bank() -> Party {
    identity(4, "O=Bank, L=City, C=BG")
}

pub fn real_estate() -> PropertyState {
    PropertyState::new(seller(), 1_000, ADDRESS)
}

pub fn eur(quantity: u64) -> Amount {
    let issuance = bank().reference(vec![1]);
    Amount::new(quantity, Issued::new(issuance, Currency::EUR))
}

pub fn maturity() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// An account held by `owner`, with the given balance and loan profile.
pub fn account(owner: &Party, balance: u64, is_employed: bool, age: u32) -> AccountState {
    AccountState {
        owner: owner.anonymise(),
        issuance: bank().reference(vec![1]),
        balance: eur(balance),
        maturity_date: maturity(),
        is_employed,
        age,
        account_number: "BG80BNBG96611020345678".into(),
        account_name: owner.name.clone(),
        loan: None,
    }
}

pub fn buyer_account(balance: u64) -> AccountState {
    account(&buyer(), balance, true, 30)
}

pub fn anonymous(seed: u8) -> AnonymousParty {
    AnonymousParty::new(Keypair::from_seed(&[seed; 32]).public_key())
}

pub fn seconds(n: i64) -> Duration {
    Duration::seconds(n)
}
