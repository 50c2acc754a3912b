//! Audit trail (tamper-evident)

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

/// Audit trail with hash chain
pub struct AuditTrail {
    events: Arc<RwLock<Vec<AuditEvent>>>,
    last_hash: Arc<RwLock<String>>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            last_hash: Arc::new(RwLock::new("genesis".into())),
        }
    }

    /// Log audit event
    pub fn log(&self, event_type: AuditEventType, actor: &str, target: &str, details: &str) {
        let prev_hash = self.last_hash.read().clone();

        let event = AuditEvent::new(event_type, actor, target, details, &prev_hash);
        let new_hash = event.hash.clone();

        self.events.write().push(event);
        *self.last_hash.write() = new_hash;
    }

    /// Get events, optionally filtered
    pub fn get_events(&self, filter: Option<AuditFilter>) -> Vec<AuditEvent> {
        let events = self.events.read();
        match filter {
            Some(f) => events.iter().filter(|e| f.matches(e)).cloned().collect(),
            None => events.clone(),
        }
    }

    /// Verify chain integrity
    pub fn verify_integrity(&self) -> IntegrityResult {
        let events = self.events.read();
        let mut prev_hash = "genesis".to_string();
        let mut valid_count = 0;

        for event in events.iter() {
            if event.prev_hash != prev_hash {
                return IntegrityResult {
                    valid: false,
                    checked_count: valid_count,
                    error: Some(format!("Hash chain broken at event {}", event.id)),
                };
            }

            let computed = event.compute_hash(&prev_hash);
            if computed != event.hash {
                return IntegrityResult {
                    valid: false,
                    checked_count: valid_count,
                    error: Some(format!("Event {} hash mismatch", event.id)),
                };
            }

            prev_hash = event.hash.clone();
            valid_count += 1;
        }

        IntegrityResult {
            valid: true,
            checked_count: valid_count,
            error: None,
        }
    }

    /// Export to format
    pub fn export(&self, format: ExportFormat) -> String {
        let events = self.events.read();
        match format {
            ExportFormat::Json => serde_json::to_string_pretty(&*events).unwrap_or_default(),
            ExportFormat::Csv => Self::to_csv(&events),
        }
    }

    fn to_csv(events: &[AuditEvent]) -> String {
        let mut csv = "timestamp,event_type,actor,target,details\n".to_string();
        for e in events {
            csv.push_str(&format!(
                "{},{:?},{},{},{}\n",
                e.timestamp, e.event_type, e.actor, e.target, e.details
            ));
        }
        csv
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: AuditEventType,
    pub actor: String,
    pub target: String,
    pub details: String,
    pub prev_hash: String,
    pub hash: String,
}

impl AuditEvent {
    fn new(
        event_type: AuditEventType,
        actor: &str,
        target: &str,
        details: &str,
        prev_hash: &str,
    ) -> Self {
        let mut event = Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type,
            actor: actor.to_string(),
            target: target.to_string(),
            details: details.to_string(),
            prev_hash: prev_hash.to_string(),
            hash: String::new(),
        };

        event.hash = event.compute_hash(prev_hash);
        event
    }

    fn compute_hash(&self, prev_hash: &str) -> String {
        let data = format!(
            "{}|{}|{:?}|{}|{}|{}|{}",
            self.id, self.timestamp, self.event_type, self.actor, self.target, self.details,
            prev_hash
        );
        hex::encode(Sha256::digest(data.as_bytes()))
    }
}

/// Audited operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEventType {
    ItemCreated,
    ItemUpdated,
    ItemCancelled,
    ItemDeleted,
    NoteAdded,
    PlanCreated,
    PlanUpdated,
    PlanDeleted,
    AssessmentRun,
}

/// Audit filter
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub event_type: Option<AuditEventType>,
    pub actor: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl AuditFilter {
    fn matches(&self, event: &AuditEvent) -> bool {
        if let Some(t) = self.event_type {
            if t != event.event_type {
                return false;
            }
        }
        if let Some(a) = &self.actor {
            if !event.actor.contains(a) {
                return false;
            }
        }
        if let Some(s) = &self.start_time {
            if event.timestamp < *s {
                return false;
            }
        }
        if let Some(e) = &self.end_time {
            if event.timestamp > *e {
                return false;
            }
        }
        true
    }
}

/// Integrity check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityResult {
    pub valid: bool,
    pub checked_count: usize,
    pub error: Option<String>,
}

/// Export format
#[derive(Debug, Clone, Copy)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_verifies() {
        let trail = AuditTrail::new();
        trail.log(AuditEventType::ItemCreated, "alice", "ISO27001-REM-000001", "created");
        trail.log(AuditEventType::ItemUpdated, "bob", "ISO27001-REM-000001", "status change");
        trail.log(AuditEventType::ItemDeleted, "alice", "ISO27001-REM-000001", "removed");

        let result = trail.verify_integrity();
        assert!(result.valid);
        assert_eq!(result.checked_count, 3);
    }

    #[test]
    fn test_tampering_detected() {
        let trail = AuditTrail::new();
        trail.log(AuditEventType::ItemCreated, "alice", "x", "created");
        trail.log(AuditEventType::ItemUpdated, "alice", "x", "updated");

        trail.events.write()[0].details = "forged".into();
        let result = trail.verify_integrity();
        assert!(!result.valid);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_filter_by_type_and_actor() {
        let trail = AuditTrail::new();
        trail.log(AuditEventType::ItemCreated, "alice", "a", "");
        trail.log(AuditEventType::PlanCreated, "bob", "b", "");

        let by_type = trail.get_events(Some(AuditFilter {
            event_type: Some(AuditEventType::PlanCreated),
            ..Default::default()
        }));
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].actor, "bob");

        let by_actor = trail.get_events(Some(AuditFilter {
            actor: Some("alice".into()),
            ..Default::default()
        }));
        assert_eq!(by_actor.len(), 1);
    }

    #[test]
    fn test_csv_export_has_header() {
        let trail = AuditTrail::new();
        trail.log(AuditEventType::ItemCreated, "alice", "x", "created");
        let csv = trail.export(ExportFormat::Csv);
        assert!(csv.starts_with("timestamp,event_type,actor,target,details\n"));
        assert_eq!(csv.lines().count(), 2);
    }
}
