//! Transaction-generation helpers for bank accounts.
//!
//! These assemble the states and command a valid transaction needs; they do
//! not select cash, collect signatures or notarise. The resulting builder is
//! handed back so the caller can add what else it needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rems_protocol::identity::{AnonymousParty, PartyAndReference};
use rems_protocol::state::{AccountState, Amount, CashState};
use rems_protocol::transaction::{Command, TimeWindow, TransactionBuilder};

use crate::transitions::move_account;

/// Account details fixed at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTerms {
    pub maturity_date: DateTime<Utc>,
    pub is_employed: bool,
    pub age: u32,
    pub account_number: String,
    pub account_name: String,
    pub loan: Option<u64>,
}

/// A transaction issuing a new account, owned by the issuer and signed by it.
///
/// `window` must carry an upper bound before `terms.maturity_date` for the
/// issuance to validate.
pub fn generate_issue(
    issuance: PartyAndReference,
    balance: Amount,
    terms: AccountTerms,
    window: TimeWindow,
) -> TransactionBuilder {
    let issuer_key = issuance.party.owning_key();
    let account = AccountState {
        owner: AnonymousParty::new(issuer_key),
        issuance,
        balance,
        maturity_date: terms.maturity_date,
        is_employed: terms.is_employed,
        age: terms.age,
        account_number: terms.account_number,
        account_name: terms.account_name,
        loan: terms.loan,
    };
    TransactionBuilder::new()
        .output(account)
        .command(Command::Issue)
        .signer(issuer_key)
        .time_window(window)
}

/// Adds a move of `account` to `new_owner`, signed by the current owner.
pub fn generate_move(
    tx: TransactionBuilder,
    account: &AccountState,
    new_owner: AnonymousParty,
) -> TransactionBuilder {
    let (command, moved) = move_account(account, new_owner);
    tx.input(account.clone())
        .output(moved)
        .command(command)
        .signer(account.owner.owning_key)
}

/// Adds the redemption of `account` at `redeemed_at`: the account is
/// consumed and its face value is paid to the owner in cash.
///
/// Which cash the payer spends is the wallet's business; only the payment
/// output is added here.
pub fn generate_redeem(
    tx: TransactionBuilder,
    account: &AccountState,
    redeemed_at: DateTime<Utc>,
) -> TransactionBuilder {
    tx.input(account.clone())
        .output(CashState::new(account.owner, account.balance.clone()))
        .command(Command::Redeem)
        .signer(account.owner.owning_key)
        .time_window(TimeWindow::from_only(redeemed_at))
}
