//! Party types: who holds a key, and how much of them we know.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::PublicKey;

// ---------------------------------------------------------------------------
// Party
// ---------------------------------------------------------------------------

/// A well-known participant: a legal name bound to an owning key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    /// Human-readable legal name, e.g. `"O=John Doe, L=City, C=BG"`.
    pub name: String,
    /// The key that signs on this party's behalf.
    pub owning_key: PublicKey,
}

impl Party {
    pub fn new(name: impl Into<String>, owning_key: PublicKey) -> Self {
        Self {
            name: name.into(),
            owning_key,
        }
    }

    /// Drops the name, keeping only the key.
    pub fn anonymise(&self) -> AnonymousParty {
        AnonymousParty::new(self.owning_key)
    }

    /// Builds a reference to something this party issued.
    pub fn reference(&self, reference: impl Into<Vec<u8>>) -> PartyAndReference {
        PartyAndReference::new(AbstractParty::from(self.clone()), reference)
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// AnonymousParty
// ---------------------------------------------------------------------------

/// A participant known only by its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnonymousParty {
    pub owning_key: PublicKey,
}

impl AnonymousParty {
    pub fn new(owning_key: PublicKey) -> Self {
        Self { owning_key }
    }

    /// The party holding [`PublicKey::NULL`].
    pub fn null() -> Self {
        Self::new(PublicKey::NULL)
    }
}

impl fmt::Display for AnonymousParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Anonymous({})", &self.owning_key.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// AbstractParty
// ---------------------------------------------------------------------------

/// Either a well-known or an anonymous party.
///
/// Two `AbstractParty` values are equal when their owning keys are equal,
/// regardless of whether one of them carries a name.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbstractParty {
    WellKnown(Party),
    Anonymous(AnonymousParty),
}

impl AbstractParty {
    /// The key that signs on this party's behalf.
    pub fn owning_key(&self) -> PublicKey {
        match self {
            Self::WellKnown(party) => party.owning_key,
            Self::Anonymous(party) => party.owning_key,
        }
    }
}

impl PartialEq for AbstractParty {
    fn eq(&self, other: &Self) -> bool {
        self.owning_key() == other.owning_key()
    }
}

impl std::hash::Hash for AbstractParty {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.owning_key().hash(state);
    }
}

impl From<Party> for AbstractParty {
    fn from(party: Party) -> Self {
        Self::WellKnown(party)
    }
}

impl From<AnonymousParty> for AbstractParty {
    fn from(party: AnonymousParty) -> Self {
        Self::Anonymous(party)
    }
}

impl fmt::Display for AbstractParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WellKnown(party) => fmt::Display::fmt(party, f),
            Self::Anonymous(party) => fmt::Display::fmt(party, f),
        }
    }
}

// ---------------------------------------------------------------------------
// PartyAndReference
// ---------------------------------------------------------------------------

/// An issuing party plus the opaque reference it issued under.
///
/// The reference is hex-encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyAndReference {
    pub party: AbstractParty,
    #[serde(with = "hex_bytes")]
    pub reference: Vec<u8>,
}

impl PartyAndReference {
    pub fn new(party: AbstractParty, reference: impl Into<Vec<u8>>) -> Self {
        Self {
            party,
            reference: reference.into(),
        }
    }
}

impl fmt::Display for PartyAndReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.party, hex::encode(&self.reference))
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
