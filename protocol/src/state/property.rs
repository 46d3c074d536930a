//! The property record: one real-estate asset and who holds rights over it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

use crate::crypto::PublicKey;
use crate::identity::Party;

// ---------------------------------------------------------------------------
// UniqueIdentifier
// ---------------------------------------------------------------------------

/// Stable identifier shared by every version of the same asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueIdentifier {
    /// Optional identifier from an outside registry (cadastre number, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub id: Uuid,
}

impl UniqueIdentifier {
    /// Fresh identifier with a random v4 UUID.
    pub fn new() -> Self {
        Self {
            external_id: None,
            id: Uuid::new_v4(),
        }
    }

    /// Fresh identifier carrying an external reference.
    pub fn with_external_id(external_id: impl Into<String>) -> Self {
        Self {
            external_id: Some(external_id.into()),
            id: Uuid::new_v4(),
        }
    }
}

impl Default for UniqueIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UniqueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.external_id {
            Some(external) => write!(f, "{}_{}", external, self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

// ---------------------------------------------------------------------------
// PropertyState
// ---------------------------------------------------------------------------

/// A real-estate asset on the ledger.
///
/// Registered with no tenant; afterwards, each transition changes exactly
/// one of `owner` or `tenant`. `value` is the sale price or rent reference
/// in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyState {
    pub id: UniqueIdentifier,
    pub owner: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Party>,
    pub value: u64,
    pub address: String,
}

impl PropertyState {
    /// A newly registered property: fresh id, no tenant.
    pub fn new(owner: Party, value: u64, address: impl Into<String>) -> Self {
        Self {
            id: UniqueIdentifier::new(),
            owner,
            tenant: None,
            value,
            address: address.into(),
        }
    }

    /// Parties whose signature this state structurally requires: the owner
    /// and, while the property is rented, the tenant.
    pub fn participants(&self) -> Vec<&Party> {
        std::iter::once(&self.owner).chain(self.tenant.as_ref()).collect()
    }

    /// Owning keys of [`participants`](Self::participants).
    pub fn participant_keys(&self) -> BTreeSet<PublicKey> {
        self.participants()
            .into_iter()
            .map(|party| party.owning_key)
            .collect()
    }

    /// Copy of this state with a different owner.
    pub fn with_owner(&self, owner: Party) -> Self {
        Self {
            owner,
            ..self.clone()
        }
    }

    /// Copy of this state with a different tenant (or none).
    pub fn with_tenant(&self, tenant: Option<Party>) -> Self {
        Self {
            tenant,
            ..self.clone()
        }
    }

    pub fn is_rented(&self) -> bool {
        self.tenant.is_some()
    }
}
