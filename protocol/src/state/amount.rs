//! Monetary amounts tagged with the currency and the party that issued them.
//!
//! An [`Amount`] is only comparable, in magnitude, with another amount of the
//! same [`Issued`] token. Mixing tokens is never silently allowed: addition
//! returns [`AmountError::TokenMismatch`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::identity::PartyAndReference;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during amount arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Tried to combine amounts of different currencies or issuers.
    #[error("token mismatch: cannot combine {left} with {right}")]
    TokenMismatch { left: String, right: String },

    /// The sum would not fit in a `u64`.
    #[error("amount overflow: {current} + {added} exceeds u64::MAX")]
    Overflow { current: u64, added: u64 },
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Currencies the ledger understands for balances and settlement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro (smallest unit: cent, 10^-2).
    EUR,
    /// United States Dollar (smallest unit: cent, 10^-2).
    USD,
    /// Pound Sterling (smallest unit: penny, 10^-2).
    GBP,
    /// Bulgarian Lev (smallest unit: stotinka, 10^-2).
    BGN,
    /// Any other ISO 4217 code.
    Custom(String),
}

impl Currency {
    /// Number of decimal places for display formatting.
    pub fn decimals(&self) -> u8 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EUR => write!(f, "EUR"),
            Self::USD => write!(f, "USD"),
            Self::GBP => write!(f, "GBP"),
            Self::BGN => write!(f, "BGN"),
            Self::Custom(code) => write!(f, "{}", code),
        }
    }
}

// ---------------------------------------------------------------------------
// Issued
// ---------------------------------------------------------------------------

/// A currency together with the party (and reference) that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issued {
    pub issuer: PartyAndReference,
    pub product: Currency,
}

impl Issued {
    pub fn new(issuer: PartyAndReference, product: Currency) -> Self {
        Self { issuer, product }
    }
}

impl fmt::Display for Issued {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issued by {}", self.product, self.issuer)
    }
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// A quantity of an issued token, in the smallest unit of its currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub quantity: u64,
    pub token: Issued,
}

impl Amount {
    pub fn new(quantity: u64, token: Issued) -> Self {
        Self { quantity, token }
    }

    /// A zero amount of the given token.
    pub fn zero(token: Issued) -> Self {
        Self::new(0, token)
    }

    /// Returns `true` if both amounts are of the same issued token.
    pub fn same_token(&self, other: &Amount) -> bool {
        self.token == other.token
    }

    /// Adds two amounts of the same token.
    ///
    /// # Errors
    ///
    /// [`AmountError::TokenMismatch`] if the tokens differ,
    /// [`AmountError::Overflow`] if the sum exceeds `u64::MAX`.
    pub fn checked_add(&self, other: &Amount) -> Result<Amount, AmountError> {
        if !self.same_token(other) {
            return Err(AmountError::TokenMismatch {
                left: self.token.to_string(),
                right: other.token.to_string(),
            });
        }
        let quantity =
            self.quantity
                .checked_add(other.quantity)
                .ok_or(AmountError::Overflow {
                    current: self.quantity,
                    added: other.quantity,
                })?;
        Ok(Amount::new(quantity, self.token.clone()))
    }

    /// Sums an iterator of amounts. Returns `Ok(None)` for an empty iterator.
    pub fn sum<'a, I>(amounts: I) -> Result<Option<Amount>, AmountError>
    where
        I: IntoIterator<Item = &'a Amount>,
    {
        let mut total: Option<Amount> = None;
        for amount in amounts {
            total = Some(match total {
                None => amount.clone(),
                Some(acc) => acc.checked_add(amount)?,
            });
        }
        Ok(total)
    }

    /// Human-readable string with decimal formatting, e.g. `"10.50 EUR"`.
    pub fn display_decimal(&self) -> String {
        let decimals = self.token.product.decimals() as u32;
        let divisor = 10u64.pow(decimals);
        format!(
            "{}.{:0>width$} {}",
            self.quantity / divisor,
            self.quantity % divisor,
            self.token.product,
            width = decimals as usize
        )
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.token)
    }
}
