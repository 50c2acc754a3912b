//! Remediation item model

use crate::frameworks::Framework;
use chrono::{DateTime, NaiveDate, Utc};
use grc_common::{Money, ProgressPercent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gap severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Remediation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Remediation lifecycle status
///
/// The terminal subset is {Completed, Closed, Cancelled}; everything else
/// counts as active work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemediationStatus {
    NotStarted,
    Planning,
    InProgress,
    UnderReview,
    OnHold,
    Completed,
    Closed,
    Cancelled,
    Deferred,
}

impl RemediationStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [RemediationStatus; 9] = [
        Self::NotStarted,
        Self::Planning,
        Self::InProgress,
        Self::UnderReview,
        Self::OnHold,
        Self::Completed,
        Self::Closed,
        Self::Cancelled,
        Self::Deferred,
    ];

    /// Whether the status ends the remediation lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Closed | Self::Cancelled)
    }
}

impl std::fmt::Display for RemediationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not Started"),
            Self::Planning => write!(f, "Planning"),
            Self::InProgress => write!(f, "In Progress"),
            Self::UnderReview => write!(f, "Under Review"),
            Self::OnHold => write!(f, "On Hold"),
            Self::Completed => write!(f, "Completed"),
            Self::Closed => write!(f, "Closed"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Deferred => write!(f, "Deferred"),
        }
    }
}

/// A trackable unit of compliance remediation work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationItem {
    pub id: Uuid,
    /// Human-readable reference, e.g. `ISO27001-REM-000001`
    pub reference: String,
    pub title: String,
    pub description: String,
    pub framework: Framework,
    pub control_id: String,
    pub control_name: String,
    pub severity: Severity,
    pub priority: Priority,
    pub status: RemediationStatus,
    /// Explicit progress when one has been reported; `None` falls back to
    /// the status-derived estimate on read
    pub progress: Option<ProgressPercent>,
    pub assigned_to: String,
    pub assigned_department: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Set exactly when `status` is terminal
    pub completion_date: Option<NaiveDate>,
    pub estimated_cost: Money,
    pub actual_cost: Money,
    pub notes: Vec<ItemNote>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Timestamped note on a remediation item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemNote {
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for creating an item; the tracker assigns
/// `id`, `reference`, and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub framework: Framework,
    #[serde(default)]
    pub control_id: String,
    #[serde(default)]
    pub control_name: String,
    pub severity: Severity,
    pub priority: Priority,
    #[serde(default)]
    pub status: Option<RemediationStatus>,
    #[serde(default)]
    pub progress: Option<ProgressPercent>,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_department: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub estimated_cost: Money,
}

/// Partial update; only present fields are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<RemediationStatus>,
    #[serde(default)]
    pub progress: Option<ProgressPercent>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_department: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_cost: Option<Money>,
    #[serde(default)]
    pub actual_cost: Option<Money>,
}
