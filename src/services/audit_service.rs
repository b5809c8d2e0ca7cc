//! The append-only record of every mutating operation.

use crate::domain::{Actor, AuditEntry};
use crate::ledger::LedgerStore;

use super::ServiceResult;

pub struct AuditService;

impl AuditService {
    /// Appends one audit entry and returns its id.
    ///
    /// Entries are never mutated after the append; the log carries the
    /// intent and actor context that replaying transactions cannot recover.
    pub fn append(
        store: &mut LedgerStore,
        action: &str,
        entity_type: &str,
        entity_id: &str,
        actor: &Actor,
        details: impl Into<String>,
    ) -> ServiceResult<String> {
        let entry = AuditEntry::new(action, entity_type, entity_id, actor, details);
        let id = store.insert_audit(entry);
        tracing::debug!(action, entity = entity_id, "audit entry appended");
        Ok(id)
    }

    /// Entries recorded against one entity, in append order.
    pub fn entries_for<'a>(store: &'a LedgerStore, entity_id: &str) -> Vec<&'a AuditEntry> {
        store
            .audit_log()
            .iter()
            .filter(|entry| entry.entity_id == entity_id)
            .collect()
    }
}
