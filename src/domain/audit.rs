use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;
use crate::ids::{self, IdPrefix};

/// The acting user recorded on mutating operations. Role resolution happens
/// in the identity layer before a caller reaches the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One append-only record of a mutating action. Entries carry the intent
/// and actor context that transactions alone cannot reconstruct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub actor_id: String,
    pub actor_name: String,
    pub details: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        action: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        actor: &Actor,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: ids::new_id(IdPrefix::Audit),
            action: action.into(),
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            actor_id: actor.id.clone(),
            actor_name: actor.name.clone(),
            details: details.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl Identifiable for AuditEntry {
    fn id(&self) -> &str {
        &self.id
    }
}
