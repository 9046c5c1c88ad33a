//! Append-only audit trail of every mutation.
//!
//! Entries are ordered newest-first and never edited; the only removal
//! path is a full clear as part of a destructive data reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Adjust,
    /// Data-management events: export, import, clear
    Settings,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Adjust => "ADJUST",
            Self::Settings => "SETTINGS",
        }
    }
}

/// Immutable record of one mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    pub action: AuditAction,
    /// Reference to the affected item, if any. Not enforced: the item may
    /// later be deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Name snapshot taken at mutation time; survives rename and deletion.
    pub entity_name: String,
    /// Human-readable summary (per-location deltas for ADJUST)
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
}

/// The audit trail. Newest entries first.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
}

impl AuditLog {
    pub fn new(entries: Vec<AuditLogEntry>) -> Self {
        Self { entries }
    }

    /// Append a new entry (prepended: the log reads newest-first).
    pub fn record(
        &mut self,
        action: AuditAction,
        entity_name: impl Into<String>,
        details: impl Into<String>,
        entity_id: Option<String>,
        user: &str,
    ) {
        let entry = AuditLogEntry {
            id: Uuid::new_v4().to_string(),
            action,
            entity_id,
            entity_name: entity_name.into(),
            details: details.into(),
            timestamp: Utc::now(),
            user: user.to_string(),
        };
        self.entries.insert(0, entry);
    }

    /// Read-only ordered view, newest first.
    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry. Only reachable from the destructive reset path.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends_newest_first() {
        let mut log = AuditLog::default();
        log.record(AuditAction::Create, "First", "created", None, "Admin");
        log.record(AuditAction::Delete, "Second", "deleted", None, "Admin");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].entity_name, "Second");
        assert_eq!(log.entries()[1].entity_name, "First");
    }

    #[test]
    fn test_entries_have_unique_ids() {
        let mut log = AuditLog::default();
        log.record(AuditAction::Create, "A", "", None, "Admin");
        log.record(AuditAction::Create, "B", "", None, "Admin");
        assert_ne!(log.entries()[0].id, log.entries()[1].id);
    }

    #[test]
    fn test_action_serializes_uppercase() {
        let value = serde_json::to_value(AuditAction::Adjust).unwrap();
        assert_eq!(value, "ADJUST");
        let parsed: AuditAction = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, AuditAction::Adjust);
    }

    #[test]
    fn test_name_snapshot_survives_without_entity() {
        let mut log = AuditLog::default();
        log.record(
            AuditAction::Delete,
            "Old Drill",
            "Deleted item permanently",
            Some("gone-id".to_string()),
            "Admin",
        );
        let entry = &log.entries()[0];
        assert_eq!(entry.entity_name, "Old Drill");
        assert_eq!(entry.entity_id.as_deref(), Some("gone-id"));
    }
}
