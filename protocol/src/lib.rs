// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # REMS Protocol — Ledger Vocabulary
//!
//! REMS settles real-estate sales and rentals through linked ledger states:
//! a property record and the counterparty's bank-account record. This crate
//! is the shared vocabulary every other component speaks. It knows what a
//! state looks like and how a transaction is shaped, but it never decides
//! whether a transaction is legal. That is the contract's job (see the
//! `rems-contracts` crate).
//!
//! ## Architecture
//!
//! - **config** — Protocol constants and the engine's tunable thresholds.
//! - **crypto** — Ed25519 public keys, the unit of signing identity.
//! - **identity** — Parties: well-known, anonymous, and issuer references.
//! - **state** — `PropertyState`, `AccountState`, `CashState`, and amounts.
//! - **transaction** — Commands, time windows, the raw ledger transaction,
//!   the typed view handed to the engine, and a fluent builder.
//!
//! ## Design Philosophy
//!
//! 1. States are immutable values. A transition produces a new value.
//! 2. No floating point anywhere near money. Quantities are `u64`.
//! 3. Typing happens once, at the partition step, never inside the rules.

pub mod config;
pub mod crypto;
pub mod identity;
pub mod state;
pub mod transaction;
