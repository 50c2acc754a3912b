//! Compliance reporting

use crate::aging::ItemView;
use crate::frameworks::Framework;
use crate::stats::{
    aging_analysis, compute_stats, monthly_trend, workload_by_assignee, AgingBucketCount,
    AssigneeWorkload, MonthlyTrendPoint, RemediationStats,
};
use crate::ComplianceEngine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Report generator
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generate executive summary across all frameworks
    pub fn executive_summary(engine: &ComplianceEngine, today: NaiveDate) -> ExecutiveSummary {
        let items = engine.tracker.all();
        let stats = compute_stats(&items, today, &engine.aging);

        let framework_completion: Vec<_> = Framework::ALL
            .iter()
            .map(|&fw| {
                let fw_items: Vec<_> = items.iter().filter(|i| i.framework == fw).cloned().collect();
                let fw_stats = compute_stats(&fw_items, today, &engine.aging);
                FrameworkCompletion {
                    framework: fw,
                    total: fw_stats.total,
                    completed: fw_stats.completed,
                    completion_rate: fw_stats.completion_rate,
                    overdue: fw_stats.overdue,
                }
            })
            .collect();

        ExecutiveSummary {
            overall_completion_rate: stats.completion_rate,
            framework_completion,
            stats,
            generated_at: chrono::Utc::now(),
        }
    }

    /// Generate a remediation report for one framework
    pub fn framework_report(
        engine: &ComplianceEngine,
        framework: Framework,
        today: NaiveDate,
    ) -> RemediationReport {
        let items = engine.tracker.by_framework(framework);
        let recent = items
            .iter()
            .take(10)
            .cloned()
            .map(|i| ItemView::derive(i, today, &engine.aging))
            .collect();

        RemediationReport {
            framework,
            stats: compute_stats(&items, today, &engine.aging),
            aging_analysis: aging_analysis(&items, today),
            assignee_workload: workload_by_assignee(&items),
            trend: monthly_trend(&items, today),
            recent_items: recent,
            generated_at: chrono::Utc::now(),
        }
    }
}

/// Per-framework completion rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkCompletion {
    pub framework: Framework,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
    pub overdue: usize,
}

/// Executive summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub overall_completion_rate: f64,
    pub framework_completion: Vec<FrameworkCompletion>,
    pub stats: RemediationStats,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Remediation report for one framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationReport {
    pub framework: Framework,
    pub stats: RemediationStats,
    pub aging_analysis: Vec<AgingBucketCount>,
    pub assignee_workload: Vec<AssigneeWorkload>,
    pub trend: Vec<MonthlyTrendPoint>,
    pub recent_items: Vec<ItemView>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDraft, Priority, Severity};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn draft(framework: Framework, title: &str) -> ItemDraft {
        ItemDraft {
            title: title.into(),
            description: String::new(),
            framework,
            control_id: String::new(),
            control_name: String::new(),
            severity: Severity::Medium,
            priority: Priority::Medium,
            status: None,
            progress: None,
            assigned_to: "alice".into(),
            assigned_department: "IT".into(),
            start_date: d(2024, 1, 1),
            due_date: d(2024, 6, 1),
            estimated_cost: Default::default(),
        }
    }

    #[test]
    fn test_executive_summary_covers_all_frameworks() {
        let engine = ComplianceEngine::new();
        engine.create_item(draft(Framework::Iso27001, "a"), "t");
        engine.create_item(draft(Framework::Hipaa, "b"), "t");

        let summary = ReportGenerator::executive_summary(&engine, d(2024, 3, 1));
        assert_eq!(summary.framework_completion.len(), Framework::ALL.len());
        assert_eq!(summary.stats.total, 2);
        let iso = summary
            .framework_completion
            .iter()
            .find(|f| f.framework == Framework::Iso27001)
            .unwrap();
        assert_eq!(iso.total, 1);
    }

    #[test]
    fn test_framework_report_scoped_to_framework() {
        let engine = ComplianceEngine::new();
        engine.create_item(draft(Framework::Iso27001, "a"), "t");
        engine.create_item(draft(Framework::Mica, "b"), "t");

        let report = ReportGenerator::framework_report(&engine, Framework::Mica, d(2024, 3, 1));
        assert_eq!(report.stats.total, 1);
        assert_eq!(report.recent_items.len(), 1);
        assert_eq!(report.trend.len(), 6);
    }
}
