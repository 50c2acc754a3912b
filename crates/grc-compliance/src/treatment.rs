//! Treatment plans
//!
//! A treatment plan groups remediation items addressing a single
//! identified risk. Rollups (control counts, progress, days overdue) are
//! derived per read against the current item set.

use crate::frameworks::Framework;
use crate::idgen;
use crate::item::{RemediationItem, RemediationStatus};
use chrono::{DateTime, NaiveDate, Utc};
use grc_common::{GrcError, GrcResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Treatment plan lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A grouping of remediation items addressing one risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub id: Uuid,
    /// Human-readable reference, e.g. `ISO27001-PLAN-000001`
    pub reference: String,
    pub title: String,
    pub description: String,
    pub framework: Framework,
    pub owner: String,
    pub status: PlanStatus,
    pub target_completion_date: NaiveDate,
    pub approved_by: Option<String>,
    pub item_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub framework: Framework,
    #[serde(default)]
    pub owner: String,
    pub target_completion_date: NaiveDate,
    #[serde(default)]
    pub item_ids: Vec<Uuid>,
}

/// A plan with its derived rollups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    #[serde(flatten)]
    pub plan: TreatmentPlan,
    pub total_controls: usize,
    pub completed_controls: usize,
    pub progress_pct: f64,
    pub days_overdue: i64,
}

/// In-memory treatment plan register
pub struct TreatmentRegister {
    plans: Arc<RwLock<HashMap<Uuid, TreatmentPlan>>>,
}

impl TreatmentRegister {
    pub fn new() -> Self {
        Self {
            plans: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a plan from a draft
    pub fn create(&self, draft: PlanDraft) -> TreatmentPlan {
        let now = Utc::now();
        let prefix = format!("{}-PLAN", draft.framework.code());

        let mut plans = self.plans.write();
        let reference = {
            let existing = plans.values().map(|p| p.reference.as_str());
            idgen::next_reference(&prefix, existing)
        };

        let plan = TreatmentPlan {
            id: Uuid::new_v4(),
            reference,
            title: draft.title,
            description: draft.description,
            framework: draft.framework,
            owner: draft.owner,
            status: PlanStatus::Draft,
            target_completion_date: draft.target_completion_date,
            approved_by: None,
            item_ids: draft.item_ids,
            created_at: now,
            updated_at: now,
        };
        plans.insert(plan.id, plan.clone());
        plan
    }

    pub fn get(&self, id: Uuid) -> Option<TreatmentPlan> {
        self.plans.read().get(&id).cloned()
    }

    /// All plans, newest first
    pub fn all(&self) -> Vec<TreatmentPlan> {
        let mut plans: Vec<_> = self.plans.read().values().cloned().collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        plans
    }

    /// Attach an item to a plan
    pub fn add_item(&self, plan_id: Uuid, item_id: Uuid) -> GrcResult<TreatmentPlan> {
        let mut plans = self.plans.write();
        let plan = plans
            .get_mut(&plan_id)
            .ok_or_else(|| GrcError::PlanNotFound(plan_id.to_string()))?;
        if !plan.item_ids.contains(&item_id) {
            plan.item_ids.push(item_id);
            plan.updated_at = Utc::now();
        }
        Ok(plan.clone())
    }

    /// Move a plan through its lifecycle; approval is recorded alongside
    pub fn set_status(
        &self,
        plan_id: Uuid,
        status: PlanStatus,
        approved_by: Option<String>,
    ) -> GrcResult<TreatmentPlan> {
        let mut plans = self.plans.write();
        let plan = plans
            .get_mut(&plan_id)
            .ok_or_else(|| GrcError::PlanNotFound(plan_id.to_string()))?;
        plan.status = status;
        if approved_by.is_some() {
            plan.approved_by = approved_by;
        }
        plan.updated_at = Utc::now();
        Ok(plan.clone())
    }

    pub fn remove(&self, id: Uuid) -> GrcResult<TreatmentPlan> {
        self.plans
            .write()
            .remove(&id)
            .ok_or_else(|| GrcError::PlanNotFound(id.to_string()))
    }

    /// Derive a plan's rollups against the given item set as of `today`
    pub fn snapshot(
        &self,
        plan_id: Uuid,
        items: &[RemediationItem],
        today: NaiveDate,
    ) -> GrcResult<PlanSnapshot> {
        let plan = self
            .get(plan_id)
            .ok_or_else(|| GrcError::PlanNotFound(plan_id.to_string()))?;
        Ok(Self::derive_snapshot(plan, items, today))
    }

    /// Rollups for every plan
    pub fn snapshots(&self, items: &[RemediationItem], today: NaiveDate) -> Vec<PlanSnapshot> {
        self.all()
            .into_iter()
            .map(|p| Self::derive_snapshot(p, items, today))
            .collect()
    }

    fn derive_snapshot(
        plan: TreatmentPlan,
        items: &[RemediationItem],
        today: NaiveDate,
    ) -> PlanSnapshot {
        let members: Vec<_> = items
            .iter()
            .filter(|i| plan.item_ids.contains(&i.id))
            .collect();
        let total = members.len();
        let completed = members
            .iter()
            .filter(|i| i.status == RemediationStatus::Completed)
            .count();
        let progress_pct = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let days_overdue = if plan.status == PlanStatus::Completed
            || plan.status == PlanStatus::Cancelled
        {
            0
        } else {
            (today - plan.target_completion_date).num_days().max(0)
        };
        PlanSnapshot {
            plan,
            total_controls: total,
            completed_controls: completed,
            progress_pct,
            days_overdue,
        }
    }
}

impl Default for TreatmentRegister {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDraft, ItemPatch, Priority, Severity};
    use crate::tracker::RemediationTracker;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn plan_draft(item_ids: Vec<Uuid>) -> PlanDraft {
        PlanDraft {
            title: "Privileged access hardening".into(),
            description: String::new(),
            framework: Framework::Iso27001,
            owner: "ciso".into(),
            target_completion_date: d(2024, 4, 1),
            item_ids,
        }
    }

    fn item_draft() -> ItemDraft {
        ItemDraft {
            title: "Restrict admin rights".into(),
            description: String::new(),
            framework: Framework::Iso27001,
            control_id: "A.8.5".into(),
            control_name: "Secure Authentication".into(),
            severity: Severity::High,
            priority: Priority::High,
            status: None,
            progress: None,
            assigned_to: String::new(),
            assigned_department: String::new(),
            start_date: d(2024, 1, 1),
            due_date: d(2024, 3, 1),
            estimated_cost: Default::default(),
        }
    }

    #[test]
    fn test_plan_reference_sequence() {
        let register = TreatmentRegister::new();
        let a = register.create(plan_draft(vec![]));
        let b = register.create(plan_draft(vec![]));
        assert_eq!(a.reference, "ISO27001-PLAN-000001");
        assert_eq!(b.reference, "ISO27001-PLAN-000002");
        assert_eq!(a.status, PlanStatus::Draft);
    }

    #[test]
    fn test_snapshot_rollups() {
        let tracker = RemediationTracker::new();
        let register = TreatmentRegister::new();
        let i1 = tracker.create(item_draft());
        let i2 = tracker.create(item_draft());
        tracker
            .update(
                i1.id,
                ItemPatch {
                    status: Some(RemediationStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();

        let plan = register.create(plan_draft(vec![i1.id, i2.id]));
        let snap = register
            .snapshot(plan.id, &tracker.all(), d(2024, 4, 11))
            .unwrap();
        assert_eq!(snap.total_controls, 2);
        assert_eq!(snap.completed_controls, 1);
        assert_eq!(snap.progress_pct, 50.0);
        assert_eq!(snap.days_overdue, 10);
    }

    #[test]
    fn test_snapshot_empty_plan_has_zero_progress() {
        let register = TreatmentRegister::new();
        let plan = register.create(plan_draft(vec![]));
        let snap = register.snapshot(plan.id, &[], d(2024, 1, 1)).unwrap();
        assert_eq!(snap.progress_pct, 0.0);
        assert_eq!(snap.days_overdue, 0);
    }

    #[test]
    fn test_completed_plan_not_overdue() {
        let register = TreatmentRegister::new();
        let plan = register.create(plan_draft(vec![]));
        register
            .set_status(plan.id, PlanStatus::Completed, Some("ciso".into()))
            .unwrap();
        let snap = register.snapshot(plan.id, &[], d(2025, 1, 1)).unwrap();
        assert_eq!(snap.days_overdue, 0);
        assert_eq!(snap.plan.approved_by.as_deref(), Some("ciso"));
    }
}
