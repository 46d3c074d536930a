//! Validation errors.

use rems_protocol::transaction::ViewError;
use thiserror::Error;

/// Why the engine refused a transaction.
///
/// Every rejection is final for the transaction as presented. Retrying the
/// same input yields the same answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A named clause failed. Carries the clause label.
    #[error("{0}")]
    RuleViolation(String),

    /// The transaction is not a well-formed instance of the shape its
    /// command expects: unknown command tag, a state of the wrong kind, or
    /// a count the rule cannot interpret.
    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    /// `Issue` or `Redeem` arrived without the time bound it depends on.
    #[error("{0}")]
    MissingTimeWindow(&'static str),
}

impl ValidationError {
    /// `true` for rule violations. Malformed transactions and missing time
    /// windows are structural and are never the outcome of a clause.
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::RuleViolation(_))
    }
}

impl From<ViewError> for ValidationError {
    fn from(err: ViewError) -> Self {
        Self::MalformedTransaction(err.to_string())
    }
}
