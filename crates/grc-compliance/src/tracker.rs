//! Remediation tracking store

use crate::aging::{aging_status, AgingConfig, AgingStatus};
use crate::frameworks::Framework;
use crate::idgen;
use crate::item::{ItemDraft, ItemNote, ItemPatch, RemediationItem, RemediationStatus};
use chrono::{NaiveDate, Utc};
use grc_common::{GrcError, GrcResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory remediation item store
///
/// All reads hand out cloned snapshots; shared state never escapes the
/// lock.
pub struct RemediationTracker {
    items: Arc<RwLock<HashMap<Uuid, RemediationItem>>>,
}

impl RemediationTracker {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create an item from a draft, assigning id, reference and timestamps
    pub fn create(&self, draft: ItemDraft) -> RemediationItem {
        let now = Utc::now();
        let status = draft.status.unwrap_or(RemediationStatus::NotStarted);
        let prefix = format!("{}-REM", draft.framework.code());

        let mut items = self.items.write();
        let reference = {
            let existing = items.values().map(|i| i.reference.as_str());
            idgen::next_reference(&prefix, existing)
        };

        let item = RemediationItem {
            id: Uuid::new_v4(),
            reference,
            title: draft.title,
            description: draft.description,
            framework: draft.framework,
            control_id: draft.control_id,
            control_name: draft.control_name,
            severity: draft.severity,
            priority: draft.priority,
            status,
            progress: draft.progress,
            assigned_to: draft.assigned_to,
            assigned_department: draft.assigned_department,
            start_date: draft.start_date,
            due_date: draft.due_date,
            completion_date: status.is_terminal().then(|| now.date_naive()),
            estimated_cost: draft.estimated_cost,
            actual_cost: Default::default(),
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        items.insert(item.id, item.clone());
        tracing::info!(reference = %item.reference, framework = %item.framework, "Remediation item created");
        item
    }

    /// Get an item by id
    pub fn get(&self, id: Uuid) -> Option<RemediationItem> {
        self.items.read().get(&id).cloned()
    }

    /// All items, newest first
    pub fn all(&self) -> Vec<RemediationItem> {
        let mut items: Vec<_> = self.items.read().values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Items for one framework
    pub fn by_framework(&self, framework: Framework) -> Vec<RemediationItem> {
        let mut items: Vec<_> = self
            .items
            .read()
            .values()
            .filter(|i| i.framework == framework)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Items in a given status
    pub fn by_status(&self, status: RemediationStatus) -> Vec<RemediationItem> {
        self.items
            .read()
            .values()
            .filter(|i| i.status == status)
            .cloned()
            .collect()
    }

    /// Non-terminal items past their due date as of `today`
    pub fn overdue(&self, today: NaiveDate, config: &AgingConfig) -> Vec<RemediationItem> {
        self.items
            .read()
            .values()
            .filter(|i| aging_status(i.due_date, i.status, today, config) == AgingStatus::Overdue)
            .cloned()
            .collect()
    }

    /// Apply a partial update
    ///
    /// The completion-date invariant is maintained here: entering a
    /// terminal status stamps it, leaving one clears it. Progress is left
    /// untouched by status transitions.
    pub fn update(&self, id: Uuid, patch: ItemPatch) -> GrcResult<RemediationItem> {
        let mut items = self.items.write();
        let item = items
            .get_mut(&id)
            .ok_or_else(|| GrcError::ItemNotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(severity) = patch.severity {
            item.severity = severity;
        }
        if let Some(priority) = patch.priority {
            item.priority = priority;
        }
        if let Some(progress) = patch.progress {
            item.progress = Some(progress);
        }
        if let Some(assigned_to) = patch.assigned_to {
            item.assigned_to = assigned_to;
        }
        if let Some(assigned_department) = patch.assigned_department {
            item.assigned_department = assigned_department;
        }
        if let Some(start_date) = patch.start_date {
            item.start_date = start_date;
        }
        if let Some(due_date) = patch.due_date {
            item.due_date = due_date;
        }
        if let Some(estimated_cost) = patch.estimated_cost {
            item.estimated_cost = estimated_cost;
        }
        if let Some(actual_cost) = patch.actual_cost {
            item.actual_cost = actual_cost;
        }
        if let Some(status) = patch.status {
            Self::transition(item, status);
        }
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    /// Soft-cancel: transition to Cancelled, keeping the record
    pub fn cancel(&self, id: Uuid) -> GrcResult<RemediationItem> {
        let mut items = self.items.write();
        let item = items
            .get_mut(&id)
            .ok_or_else(|| GrcError::ItemNotFound(id.to_string()))?;
        Self::transition(item, RemediationStatus::Cancelled);
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    /// Hard delete
    pub fn remove(&self, id: Uuid) -> GrcResult<RemediationItem> {
        self.items
            .write()
            .remove(&id)
            .ok_or_else(|| GrcError::ItemNotFound(id.to_string()))
    }

    /// Append a note
    pub fn add_note(&self, id: Uuid, text: &str, author: &str) -> GrcResult<RemediationItem> {
        let mut items = self.items.write();
        let item = items
            .get_mut(&id)
            .ok_or_else(|| GrcError::ItemNotFound(id.to_string()))?;
        item.notes.push(ItemNote {
            text: text.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
        });
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn transition(item: &mut RemediationItem, status: RemediationStatus) {
        let was_terminal = item.status.is_terminal();
        item.status = status;
        match (was_terminal, status.is_terminal()) {
            (false, true) => item.completion_date = Some(Utc::now().date_naive()),
            (true, false) => item.completion_date = None,
            _ => {}
        }
    }
}

impl Default for RemediationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Priority, Severity};

    fn draft(framework: Framework) -> ItemDraft {
        ItemDraft {
            title: "Deploy MFA for admin accounts".into(),
            description: "Roll out MFA to all privileged users".into(),
            framework,
            control_id: "A.8.5".into(),
            control_name: "Secure Authentication".into(),
            severity: Severity::Critical,
            priority: Priority::Critical,
            status: None,
            progress: None,
            assigned_to: "security-team".into(),
            assigned_department: "IT Security".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            estimated_cost: Default::default(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_references() {
        let tracker = RemediationTracker::new();
        let a = tracker.create(draft(Framework::Iso27001));
        let b = tracker.create(draft(Framework::Iso27001));
        let c = tracker.create(draft(Framework::NesaUae));
        assert_eq!(a.reference, "ISO27001-REM-000001");
        assert_eq!(b.reference, "ISO27001-REM-000002");
        assert_eq!(c.reference, "NESA-REM-000001");
        assert_eq!(a.status, RemediationStatus::NotStarted);
        assert!(a.completion_date.is_none());
    }

    #[test]
    fn test_completion_date_tracks_terminal_transitions() {
        let tracker = RemediationTracker::new();
        let item = tracker.create(draft(Framework::Hipaa));

        let completed = tracker
            .update(
                item.id,
                ItemPatch {
                    status: Some(RemediationStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(completed.completion_date.is_some());

        let reopened = tracker
            .update(
                item.id,
                ItemPatch {
                    status: Some(RemediationStatus::InProgress),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(reopened.completion_date.is_none());
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let tracker = RemediationTracker::new();
        let item = tracker.create(draft(Framework::Mica));
        let updated = tracker
            .update(
                item.id,
                ItemPatch {
                    assigned_to: Some("compliance-team".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.assigned_to, "compliance-team");
        assert_eq!(updated.title, item.title);
        assert_eq!(updated.due_date, item.due_date);
    }

    #[test]
    fn test_cancel_is_soft() {
        let tracker = RemediationTracker::new();
        let item = tracker.create(draft(Framework::Nis2));
        let cancelled = tracker.cancel(item.id).unwrap();
        assert_eq!(cancelled.status, RemediationStatus::Cancelled);
        assert!(cancelled.completion_date.is_some());
        assert!(tracker.get(item.id).is_some());
    }

    #[test]
    fn test_remove_is_hard() {
        let tracker = RemediationTracker::new();
        let item = tracker.create(draft(Framework::Nis2));
        tracker.remove(item.id).unwrap();
        assert!(tracker.get(item.id).is_none());
        assert!(tracker.remove(item.id).is_err());
    }

    #[test]
    fn test_overdue_excludes_terminal() {
        let tracker = RemediationTracker::new();
        let a = tracker.create(draft(Framework::Iso27001));
        let b = tracker.create(draft(Framework::Iso27001));
        tracker
            .update(
                b.id,
                ItemPatch {
                    status: Some(RemediationStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let overdue = tracker.overdue(today, &AgingConfig::default());
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, a.id);
    }
}
