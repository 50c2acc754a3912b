//! Aggregate statistics
//!
//! Pure reducers over a slice of remediation items. No persistence and no
//! caching; callers pass `today` and get a fresh snapshot.

use crate::aging::{age_bucket, aging_status, AgeBucket, AgingConfig, AgingStatus};
use crate::item::{RemediationItem, RemediationStatus};
use crate::progress::effective_progress;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics snapshot over a set of remediation items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemediationStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub overdue: usize,
    pub by_status: HashMap<String, usize>,
    pub by_severity: HashMap<String, usize>,
    pub by_priority: HashMap<String, usize>,
    pub by_department: HashMap<String, usize>,
    /// completed / total * 100; 0 when the set is empty
    pub completion_rate: f64,
    pub total_estimated_cost: u64,
    pub total_actual_cost: u64,
    /// Mean effective progress; 0 when the set is empty
    pub avg_progress: f64,
}

/// Compute the statistics snapshot as of `today`
pub fn compute_stats(
    items: &[RemediationItem],
    today: NaiveDate,
    config: &AgingConfig,
) -> RemediationStats {
    let total = items.len();
    let mut stats = RemediationStats {
        total,
        ..Default::default()
    };

    let mut progress_sum: u64 = 0;
    for item in items {
        match item.status {
            RemediationStatus::Completed => stats.completed += 1,
            RemediationStatus::InProgress => stats.in_progress += 1,
            RemediationStatus::NotStarted => stats.not_started += 1,
            _ => {}
        }
        if aging_status(item.due_date, item.status, today, config) == AgingStatus::Overdue {
            stats.overdue += 1;
        }
        *stats.by_status.entry(item.status.to_string()).or_insert(0) += 1;
        *stats
            .by_severity
            .entry(item.severity.to_string())
            .or_insert(0) += 1;
        *stats
            .by_priority
            .entry(item.priority.to_string())
            .or_insert(0) += 1;
        if !item.assigned_department.is_empty() {
            *stats
                .by_department
                .entry(item.assigned_department.clone())
                .or_insert(0) += 1;
        }
        stats.total_estimated_cost += item.estimated_cost.value();
        stats.total_actual_cost += item.actual_cost.value();
        progress_sum += effective_progress(item).value() as u64;
    }

    if total > 0 {
        stats.completion_rate = stats.completed as f64 / total as f64 * 100.0;
        stats.avg_progress = progress_sum as f64 / total as f64;
    }
    stats
}

/// Open/in-progress/resolved counts per assignee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssigneeWorkload {
    pub assignee: String,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Workload per assignee, busiest first
pub fn workload_by_assignee(items: &[RemediationItem]) -> Vec<AssigneeWorkload> {
    let mut map: HashMap<&str, AssigneeWorkload> = HashMap::new();
    for item in items {
        if item.assigned_to.is_empty() {
            continue;
        }
        let entry = map
            .entry(item.assigned_to.as_str())
            .or_insert_with(|| AssigneeWorkload {
                assignee: item.assigned_to.clone(),
                open: 0,
                in_progress: 0,
                resolved: 0,
            });
        match item.status {
            RemediationStatus::InProgress => entry.in_progress += 1,
            s if s.is_terminal() => entry.resolved += 1,
            _ => entry.open += 1,
        }
    }
    let mut out: Vec<_> = map.into_values().collect();
    out.sort_by(|a, b| {
        b.open
            .cmp(&a.open)
            .then(b.in_progress.cmp(&a.in_progress))
            .then(a.assignee.cmp(&b.assignee))
    });
    out
}

/// Item count per age bucket (days since creation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingBucketCount {
    pub age_range: String,
    pub count: usize,
}

/// Aging analysis over item creation dates, youngest bucket first
pub fn aging_analysis(items: &[RemediationItem], today: NaiveDate) -> Vec<AgingBucketCount> {
    let mut counts: HashMap<AgeBucket, usize> = HashMap::new();
    for item in items {
        *counts
            .entry(age_bucket(item.created_at.date_naive(), today))
            .or_insert(0) += 1;
    }
    AgeBucket::ALL
        .iter()
        .map(|b| AgingBucketCount {
            age_range: b.label().to_string(),
            count: counts.get(b).copied().unwrap_or(0),
        })
        .collect()
}

/// Created/completed counts for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub created: usize,
    pub completed: usize,
}

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Created/completed trend over the last six months, oldest first
pub fn monthly_trend(items: &[RemediationItem], today: NaiveDate) -> Vec<MonthlyTrendPoint> {
    let mut months: Vec<(i32, u32)> = Vec::with_capacity(6);
    let mut year = today.year();
    let mut month = today.month();
    for _ in 0..6 {
        months.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    months.reverse();

    months
        .into_iter()
        .map(|(y, m)| {
            let created = items
                .iter()
                .filter(|i| {
                    let d = i.created_at.date_naive();
                    d.year() == y && d.month() == m
                })
                .count();
            let completed = items
                .iter()
                .filter(|i| {
                    i.completion_date
                        .map(|d| d.year() == y && d.month() == m)
                        .unwrap_or(false)
                })
                .count();
            MonthlyTrendPoint {
                month: MONTH_ABBREV[(m - 1) as usize].to_string(),
                created,
                completed,
            }
        })
        .collect()
}
