//! Time windows: the optional lower/upper bounds a transaction is stamped
//! with, anchoring maturity and issuance deadlines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a [`TimeWindow`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeWindowError {
    /// `from_time` is not strictly before `until_time`.
    #[error("empty time window: {from} is not before {until}")]
    Empty {
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    },
}

/// A half-open interval `[from_time, until_time)`; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_time: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Both bounds set.
    ///
    /// # Errors
    ///
    /// [`TimeWindowError::Empty`] unless `from < until`.
    pub fn between(from: DateTime<Utc>, until: DateTime<Utc>) -> Result<Self, TimeWindowError> {
        if from >= until {
            return Err(TimeWindowError::Empty { from, until });
        }
        Ok(Self {
            from_time: Some(from),
            until_time: Some(until),
        })
    }

    /// Lower bound only: "not before `from`".
    pub fn from_only(from: DateTime<Utc>) -> Self {
        Self {
            from_time: Some(from),
            until_time: None,
        }
    }

    /// Upper bound only: "before `until`".
    pub fn until_only(until: DateTime<Utc>) -> Self {
        Self {
            from_time: None,
            until_time: Some(until),
        }
    }
}
