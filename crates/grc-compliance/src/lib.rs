//! OpenGRC Compliance Engine
//!
//! Remediation and treatment tracking for enterprise compliance programs.
//!
//! # Supported Frameworks
//!
//! - **ISO 27001:2022**: Information Security Management
//! - **NESA UAE IAS**: UAE Information Assurance Standard
//! - **HIPAA**: Health Information Portability and Accountability
//! - **MiCA**: EU Markets in Crypto-Assets Regulation
//! - **NIS2**: EU Network and Information Security Directive
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     COMPLIANCE ENGINE (OGE)                             │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │  ISO 27001   │  │   NESA UAE   │  │    HIPAA     │  │ MiCA / NIS2 │ │
//! │  │    :2022     │  │     IAS      │  │Security Rule │  │             │ │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘  └──────┬──────┘ │
//! │         │                 │                 │                 │        │
//! │  ┌──────▼─────────────────▼─────────────────▼─────────────────▼──────┐ │
//! │  │                      GAP ANALYSIS                                 │ │
//! │  │   Control Catalogs | Compliance Scoring | Gap → Remediation      │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │                                │                                        │
//! │  ┌──────────────┐  ┌──────────▼─────────┐  ┌──────────────┐           │
//! │  │  Treatment   │  │    Remediation     │  │    Audit     │           │
//! │  │    Plans     │  │     Tracker        │  │    Trail     │           │
//! │  │  (Rollups)   │  │  (Aging/Stats)     │  │ (Hash Chain) │           │
//! │  └──────────────┘  └────────────────────┘  └──────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod aging;
pub mod audit;
pub mod frameworks;
pub mod gap;
pub mod idgen;
pub mod item;
pub mod progress;
pub mod reporting;
pub mod stats;
pub mod tracker;
pub mod treatment;

use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

pub use aging::{aging_days, aging_status, AgingConfig, AgingStatus, ItemView};
pub use audit::{AuditEvent, AuditEventType, AuditTrail};
pub use frameworks::{Control, Framework};
pub use gap::{ComplianceStatus, Gap, GapAnalysis};
pub use grc_common::{GrcError, GrcResult, Money, ProgressPercent};
pub use item::{ItemDraft, ItemPatch, Priority, RemediationItem, RemediationStatus, Severity};
pub use stats::RemediationStats;
pub use tracker::RemediationTracker;
pub use treatment::{PlanDraft, PlanSnapshot, PlanStatus, TreatmentPlan, TreatmentRegister};

/// Main compliance engine
pub struct ComplianceEngine {
    /// Remediation item store
    pub tracker: RemediationTracker,
    /// Treatment plan register
    pub plans: TreatmentRegister,
    /// Tamper-evident audit trail
    pub audit: AuditTrail,
    /// Aging configuration
    pub aging: AgingConfig,
}

impl ComplianceEngine {
    /// Create a new compliance engine
    pub fn new() -> Self {
        Self {
            tracker: RemediationTracker::new(),
            plans: TreatmentRegister::new(),
            audit: AuditTrail::new(),
            aging: AgingConfig::default(),
        }
    }

    /// Override the aging configuration
    pub fn with_aging(mut self, aging: AgingConfig) -> Self {
        self.aging = aging;
        self
    }

    /// Create a remediation item and audit the operation
    pub fn create_item(&self, draft: ItemDraft, actor: &str) -> RemediationItem {
        let item = self.tracker.create(draft);
        self.audit.log(
            AuditEventType::ItemCreated,
            actor,
            &item.reference,
            &item.title,
        );
        item
    }

    /// Apply a partial update to an item
    pub fn update_item(
        &self,
        id: Uuid,
        patch: ItemPatch,
        actor: &str,
    ) -> GrcResult<RemediationItem> {
        let item = self.tracker.update(id, patch)?;
        self.audit.log(
            AuditEventType::ItemUpdated,
            actor,
            &item.reference,
            &format!("status: {}", item.status),
        );
        Ok(item)
    }

    /// Soft-cancel an item
    pub fn cancel_item(&self, id: Uuid, actor: &str) -> GrcResult<RemediationItem> {
        let item = self.tracker.cancel(id)?;
        self.audit
            .log(AuditEventType::ItemCancelled, actor, &item.reference, "");
        Ok(item)
    }

    /// Hard-delete an item
    pub fn delete_item(&self, id: Uuid, actor: &str) -> GrcResult<()> {
        let item = self.tracker.remove(id)?;
        self.audit
            .log(AuditEventType::ItemDeleted, actor, &item.reference, "");
        Ok(())
    }

    /// Append a note to an item
    pub fn add_note(&self, id: Uuid, text: &str, actor: &str) -> GrcResult<RemediationItem> {
        let item = self.tracker.add_note(id, text, actor)?;
        self.audit
            .log(AuditEventType::NoteAdded, actor, &item.reference, text);
        Ok(item)
    }

    /// Create a treatment plan
    pub fn create_plan(&self, draft: PlanDraft, actor: &str) -> TreatmentPlan {
        let plan = self.plans.create(draft);
        self.audit.log(
            AuditEventType::PlanCreated,
            actor,
            &plan.reference,
            &plan.title,
        );
        plan
    }

    /// Delete a treatment plan
    pub fn delete_plan(&self, id: Uuid, actor: &str) -> GrcResult<()> {
        let plan = self.plans.remove(id)?;
        self.audit
            .log(AuditEventType::PlanDeleted, actor, &plan.reference, "");
        Ok(())
    }

    /// Run a gap analysis and open a remediation item for every gap
    pub fn run_assessment(
        &self,
        framework: Framework,
        control_states: &HashMap<String, ComplianceStatus>,
        actor: &str,
    ) -> GapAnalysis {
        let today = Utc::now().date_naive();
        let analysis = gap::analyze(framework, control_states, today);
        for g in &analysis.gaps {
            let draft = g.clone().into_draft(framework, today);
            self.tracker.create(draft);
        }
        tracing::info!(
            framework = %framework,
            gaps = analysis.gaps.len(),
            score = analysis.score_pct,
            "Assessment complete"
        );
        self.audit.log(
            AuditEventType::AssessmentRun,
            actor,
            framework.code(),
            &format!("{} gaps, score {:.1}%", analysis.gaps.len(), analysis.score_pct),
        );
        analysis
    }

    /// Statistics over all items as of now
    pub fn stats(&self) -> RemediationStats {
        stats::compute_stats(&self.tracker.all(), Utc::now().date_naive(), &self.aging)
    }

    /// Statistics over one framework's items as of now
    pub fn framework_stats(&self, framework: Framework) -> RemediationStats {
        stats::compute_stats(
            &self.tracker.by_framework(framework),
            Utc::now().date_naive(),
            &self.aging,
        )
    }

    /// All items with derived aging and progress, as rendered
    pub fn item_views(&self) -> Vec<ItemView> {
        let today = Utc::now().date_naive();
        self.tracker
            .all()
            .into_iter()
            .map(|i| ItemView::derive(i, today, &self.aging))
            .collect()
    }

    /// One item with derived fields
    pub fn item_view(&self, id: Uuid) -> Option<ItemView> {
        self.tracker
            .get(id)
            .map(|i| ItemView::derive(i, Utc::now().date_naive(), &self.aging))
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
