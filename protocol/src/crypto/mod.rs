//! # Cryptographic Identity
//!
//! REMS only needs one cryptographic notion at this layer: the Ed25519 public
//! key that names a signer. Signature checking happens before a transaction
//! reaches the contract; by then, a transaction carries the set of keys that
//! signed it and the engine only asks whether the right keys are in it.
//!
//! Key generation is a thin wrapper around `ed25519-dalek`. We don't roll our
//! own anything.

pub mod keys;

pub use keys::{KeyError, Keypair, PublicKey};
