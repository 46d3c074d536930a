//! The command catalog: a closed set of transition tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::crypto::PublicKey;

/// A command tag that names no known transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown command tag: {0:?}")]
pub struct UnknownCommand(pub String);

/// A transition tag. Each tag names exactly one validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Put a new property on the ledger.
    Register,
    /// Transfer a property to a buyer paying from their own balance.
    Sell,
    /// Transfer a property to a buyer whose balance is loan-augmented.
    SellWithLoan,
    /// Give a vacant property a tenant.
    Rent,
    /// Remove the tenant of a rented property.
    TerminateRent,
    /// Issue a new bank account.
    Issue,
    /// Reassign a bank account to a new owner.
    Move,
    /// Consume a matured bank account against cash paid to its owner.
    Redeem,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Register,
        Command::Sell,
        Command::SellWithLoan,
        Command::Rent,
        Command::TerminateRent,
        Command::Issue,
        Command::Move,
        Command::Redeem,
    ];

    /// The wire tag of this command.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Sell => "Sell",
            Self::SellWithLoan => "SellWithLoan",
            Self::Rent => "Rent",
            Self::TerminateRent => "TerminateRent",
            Self::Issue => "Issue",
            Self::Move => "Move",
            Self::Redeem => "Redeem",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.tag() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// The command as it travels inside a transaction: a raw tag plus the keys
/// that signed it.
///
/// The tag stays a string on the wire so that an unrecognised tag is a
/// validation failure, not a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandData {
    pub tag: String,
    #[serde(default)]
    pub signers: BTreeSet<PublicKey>,
}

impl CommandData {
    pub fn new(command: Command, signers: impl IntoIterator<Item = PublicKey>) -> Self {
        Self {
            tag: command.tag().to_string(),
            signers: signers.into_iter().collect(),
        }
    }

    /// Parses the tag into a [`Command`].
    pub fn command(&self) -> Result<Command, UnknownCommand> {
        self.tag.parse()
    }
}
