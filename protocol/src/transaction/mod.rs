//! # Transaction Module
//!
//! Everything about the shape of a REMS transaction.
//!
//! ## Architecture
//!
//! ```text
//! command.rs     — The closed Command catalog and the wire-level CommandData
//! time_window.rs — Optional lower/upper time bounds
//! ledger.rs      — LedgerTransaction: type-erased states, command, window
//! view.rs        — The partition step producing a typed TransactionView
//! builder.rs     — Fluent TransactionBuilder
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** — assemble a [`LedgerTransaction`] with [`TransactionBuilder`].
//! 2. **Sign** — the identity layer collects signatures and fills the signer
//!    set. Outside this crate.
//! 3. **Partition** — [`TransactionView::from_ledger`] types the states.
//! 4. **Verify** — the contract decides. Outside this crate.

pub mod builder;
pub mod command;
pub mod ledger;
pub mod time_window;
pub mod view;

pub use builder::{BuildError, TransactionBuilder};
pub use command::{Command, CommandData, UnknownCommand};
pub use ledger::LedgerTransaction;
pub use time_window::{TimeWindow, TimeWindowError};
pub use view::{group_accounts, AccountGroup, StateGroups, TransactionView, ViewError};
