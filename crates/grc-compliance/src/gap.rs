//! Gap analysis
//!
//! Compares assessed control states against a framework catalog and opens
//! one remediation gap per control that is not compliant.

use crate::frameworks::{Control, Framework};
use crate::item::{ItemDraft, Priority, Severity};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Assessed state of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    PartiallyCompliant,
    NotApplicable,
    Unknown,
}

/// Default remediation deadline by severity
pub fn default_due_date(severity: Severity, today: NaiveDate) -> NaiveDate {
    today
        + match severity {
            Severity::Critical => Duration::days(7),
            Severity::High => Duration::days(30),
            Severity::Medium => Duration::days(90),
            Severity::Low => Duration::days(180),
        }
}

/// A control found non-compliant during assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub control_id: String,
    pub control_name: String,
    pub category: String,
    pub status: ComplianceStatus,
    pub severity: Severity,
    pub recommended_due_date: NaiveDate,
}

/// Gap analysis result for one framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub framework: Framework,
    pub total_controls: usize,
    pub assessed: usize,
    pub compliant: usize,
    pub partially_compliant: usize,
    pub non_compliant: usize,
    pub not_assessed: usize,
    /// (compliant + 0.5 × partial) / assessed × 100; 0 when nothing was
    /// assessed
    pub score_pct: f64,
    pub gaps: Vec<Gap>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Assess `control_states` against the framework catalog as of `today`
///
/// Controls marked `NotApplicable` are excluded entirely. Controls absent
/// from `control_states` count as `Unknown` and open a gap.
pub fn analyze(
    framework: Framework,
    control_states: &HashMap<String, ComplianceStatus>,
    today: NaiveDate,
) -> GapAnalysis {
    let catalog = framework.controls();
    let mut analysis = GapAnalysis {
        framework,
        total_controls: 0,
        assessed: 0,
        compliant: 0,
        partially_compliant: 0,
        non_compliant: 0,
        not_assessed: 0,
        score_pct: 0.0,
        gaps: Vec::new(),
        generated_at: chrono::Utc::now(),
    };

    for control in &catalog {
        let status = control_states
            .get(&control.id)
            .copied()
            .unwrap_or(ComplianceStatus::Unknown);
        if status == ComplianceStatus::NotApplicable {
            continue;
        }
        analysis.total_controls += 1;
        match status {
            ComplianceStatus::Compliant => {
                analysis.assessed += 1;
                analysis.compliant += 1;
            }
            ComplianceStatus::PartiallyCompliant => {
                analysis.assessed += 1;
                analysis.partially_compliant += 1;
            }
            ComplianceStatus::NonCompliant => {
                analysis.assessed += 1;
                analysis.non_compliant += 1;
            }
            ComplianceStatus::Unknown => analysis.not_assessed += 1,
            ComplianceStatus::NotApplicable => unreachable!(),
        }
        if status != ComplianceStatus::Compliant {
            analysis.gaps.push(gap_for(control, status, today));
        }
    }

    if analysis.assessed > 0 {
        analysis.score_pct = (analysis.compliant as f64
            + analysis.partially_compliant as f64 * 0.5)
            / analysis.assessed as f64
            * 100.0;
    }
    analysis
}

fn gap_for(control: &Control, status: ComplianceStatus, today: NaiveDate) -> Gap {
    Gap {
        control_id: control.id.clone(),
        control_name: control.name.clone(),
        category: control.category.clone(),
        status,
        severity: control.default_severity,
        recommended_due_date: default_due_date(control.default_severity, today),
    }
}

impl Gap {
    /// Build the remediation item draft that tracks this gap
    pub fn into_draft(self, framework: Framework, today: NaiveDate) -> ItemDraft {
        let priority = match self.severity {
            Severity::Critical => Priority::Critical,
            Severity::High => Priority::High,
            Severity::Medium => Priority::Medium,
            Severity::Low => Priority::Low,
        };
        ItemDraft {
            title: format!("Remediate {}: {}", self.control_id, self.control_name),
            description: format!(
                "{} control {} assessed as {:?}",
                framework, self.control_id, self.status
            ),
            framework,
            control_id: self.control_id,
            control_name: self.control_name,
            severity: self.severity,
            priority,
            status: None,
            progress: None,
            assigned_to: String::new(),
            assigned_department: String::new(),
            start_date: today,
            due_date: self.recommended_due_date,
            estimated_cost: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_all_compliant_scores_100() {
        let today = d(2024, 1, 1);
        let states: HashMap<String, ComplianceStatus> = Framework::Hipaa
            .controls()
            .into_iter()
            .map(|c| (c.id, ComplianceStatus::Compliant))
            .collect();
        let analysis = analyze(Framework::Hipaa, &states, today);
        assert_eq!(analysis.score_pct, 100.0);
        assert!(analysis.gaps.is_empty());
    }

    #[test]
    fn test_unassessed_controls_open_gaps_without_scoring() {
        let today = d(2024, 1, 1);
        let analysis = analyze(Framework::Nis2, &HashMap::new(), today);
        assert_eq!(analysis.assessed, 0);
        assert_eq!(analysis.score_pct, 0.0);
        assert_eq!(analysis.not_assessed, analysis.total_controls);
        assert_eq!(analysis.gaps.len(), analysis.total_controls);
    }

    #[test]
    fn test_partial_counts_half() {
        let today = d(2024, 1, 1);
        let catalog = Framework::Mica.controls();
        let mut states = HashMap::new();
        states.insert(catalog[0].id.clone(), ComplianceStatus::Compliant);
        states.insert(catalog[1].id.clone(), ComplianceStatus::PartiallyCompliant);
        for c in &catalog[2..] {
            states.insert(c.id.clone(), ComplianceStatus::NotApplicable);
        }
        let analysis = analyze(Framework::Mica, &states, today);
        assert_eq!(analysis.assessed, 2);
        assert_eq!(analysis.score_pct, 75.0);
        // The partial control still needs remediation.
        assert_eq!(analysis.gaps.len(), 1);
    }

    #[test]
    fn test_due_date_ladder() {
        let today = d(2024, 1, 1);
        assert_eq!(default_due_date(Severity::Critical, today), d(2024, 1, 8));
        assert_eq!(default_due_date(Severity::High, today), d(2024, 1, 31));
        assert_eq!(default_due_date(Severity::Medium, today), d(2024, 3, 31));
        assert_eq!(default_due_date(Severity::Low, today), d(2024, 6, 29));
    }

    #[test]
    fn test_gap_draft_carries_control() {
        let today = d(2024, 1, 1);
        let mut states = HashMap::new();
        states.insert("Art.23".to_string(), ComplianceStatus::NonCompliant);
        for c in Framework::Nis2.controls() {
            states.entry(c.id).or_insert(ComplianceStatus::Compliant);
        }
        let analysis = analyze(Framework::Nis2, &states, today);
        assert_eq!(analysis.gaps.len(), 1);
        let draft = analysis.gaps[0].clone().into_draft(Framework::Nis2, today);
        assert_eq!(draft.control_id, "Art.23");
        assert_eq!(draft.severity, Severity::Critical);
        assert_eq!(draft.due_date, d(2024, 1, 8));
    }
}
