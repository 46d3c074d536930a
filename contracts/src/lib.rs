//! # REMS Contracts
//!
//! The contract code of the REMS ledger: a pure decision function over a
//! fully materialised transaction. Given consumed states, produced states,
//! one command and the set of keys that signed it, [`RealEstateContract`]
//! either accepts or names the first clause that failed.
//!
//! - **Real estate** — `Register`, `Sell`, `SellWithLoan`, `Rent`,
//!   `TerminateRent` over [`PropertyState`]s, gated by the counterparty's
//!   post-transition [`AccountState`].
//! - **Bank accounts** — `Issue`, `Move`, `Redeem` over [`AccountState`]s.
//!
//! ## Design Principles
//!
//! 1. Fail fast, fail whole. The first unmet clause rejects the entire
//!    transaction and is reported by its label.
//! 2. No I/O, no clocks, no mutation. Time comes from the transaction's own
//!    time window.
//! 3. Thresholds are configuration ([`EngineConfig`]), not literals.
//!
//! [`PropertyState`]: rems_protocol::state::PropertyState
//! [`AccountState`]: rems_protocol::state::AccountState
//! [`EngineConfig`]: rems_protocol::config::EngineConfig

pub mod bank_account;
pub mod clauses;
pub mod contract;
pub mod error;
pub mod generate;
pub mod real_estate;
pub mod transitions;

pub use contract::RealEstateContract;
pub use error::ValidationError;
pub use generate::{generate_issue, generate_move, generate_redeem, AccountTerms};
pub use transitions::TransitionError;
