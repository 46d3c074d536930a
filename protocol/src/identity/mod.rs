//! # Identity Module
//!
//! Parties on the REMS ledger. Every party is ultimately a [`PublicKey`];
//! the types here add the context a state needs about who holds that key.
//!
//! - [`Party`] — a well-known participant with a legal name. Property owners
//!   and tenants are well-known.
//! - [`AnonymousParty`] — a bare key. Bank-account holders may stay anonymous.
//! - [`AbstractParty`] — either of the above, for fields that accept both.
//! - [`PartyAndReference`] — an issuer plus the opaque reference under which
//!   it issued something (an account, a currency claim).
//!
//! Equality between parties of different kinds is always by owning key.
//!
//! [`PublicKey`]: crate::crypto::PublicKey

pub mod party;

pub use party::{AbstractParty, AnonymousParty, Party, PartyAndReference};
