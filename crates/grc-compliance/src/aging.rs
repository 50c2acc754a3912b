//! Aging/status derivation
//!
//! Pure functions over `(due_date, status, today)`. Aging is never stored;
//! every read derives it again, since `today` moves.

use crate::item::{RemediationItem, RemediationStatus};
use crate::progress::effective_progress;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived timeline state of a remediation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgingStatus {
    Overdue,
    DueSoon,
    OnTrack,
    Completed,
}

impl std::fmt::Display for AgingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue => write!(f, "Overdue"),
            Self::DueSoon => write!(f, "Due Soon"),
            Self::OnTrack => write!(f, "On Track"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Aging configuration
///
/// The due-soon window was never a fixed constant in practice; it is a
/// parameter here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgingConfig {
    /// Days ahead of the due date at which an item counts as due soon
    pub due_soon_window_days: i64,
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            due_soon_window_days: 14,
        }
    }
}

/// Derive the aging status of an item
///
/// Terminal statuses win regardless of due date.
pub fn aging_status(
    due_date: NaiveDate,
    status: RemediationStatus,
    today: NaiveDate,
    config: &AgingConfig,
) -> AgingStatus {
    if status.is_terminal() {
        return AgingStatus::Completed;
    }
    if due_date < today {
        return AgingStatus::Overdue;
    }
    if (due_date - today).num_days() <= config.due_soon_window_days {
        return AgingStatus::DueSoon;
    }
    AgingStatus::OnTrack
}

/// Whole days past due; 0 for items not yet due
pub fn aging_days(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - due_date).num_days().max(0)
}

/// Age range of a finding since creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    Days0To30,
    Days31To60,
    Days61To90,
    Days90Plus,
}

impl AgeBucket {
    /// Bucket label as reported
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days0To30 => "0-30 days",
            Self::Days31To60 => "31-60 days",
            Self::Days61To90 => "61-90 days",
            Self::Days90Plus => "90+ days",
        }
    }

    /// All buckets, youngest first
    pub const ALL: [AgeBucket; 4] = [
        Self::Days0To30,
        Self::Days31To60,
        Self::Days61To90,
        Self::Days90Plus,
    ];
}

/// Classify an item by days since creation
pub fn age_bucket(created: NaiveDate, today: NaiveDate) -> AgeBucket {
    let days = (today - created).num_days();
    if days <= 30 {
        AgeBucket::Days0To30
    } else if days <= 60 {
        AgeBucket::Days31To60
    } else if days <= 90 {
        AgeBucket::Days61To90
    } else {
        AgeBucket::Days90Plus
    }
}

/// A remediation item together with its derived fields, as rendered to
/// consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: RemediationItem,
    pub aging_status: AgingStatus,
    pub aging_days: i64,
    pub effective_progress: u8,
}

impl ItemView {
    /// Derive the view of an item as of `today`
    pub fn derive(item: RemediationItem, today: NaiveDate, config: &AgingConfig) -> Self {
        let aging = aging_status(item.due_date, item.status, today, config);
        let days = match aging {
            AgingStatus::Overdue => aging_days(item.due_date, today),
            _ => 0,
        };
        let effective = effective_progress(&item).value();
        Self {
            item,
            aging_status: aging,
            aging_days: days,
            effective_progress: effective,
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
    fn test_terminal_overrides_ancient_due_date() {
        let cfg = AgingConfig::default();
        let status = aging_status(
            d(2020, 1, 1),
            RemediationStatus::Completed,
            d(2024, 3, 1),
            &cfg,
        );
        assert_eq!(status, AgingStatus::Completed);

        for s in [RemediationStatus::Closed, RemediationStatus::Cancelled] {
            assert_eq!(
                aging_status(d(2020, 1, 1), s, d(2024, 3, 1), &cfg),
                AgingStatus::Completed
            );
        }
    }

    #[test]
    fn test_overdue_with_day_count() {
        let cfg = AgingConfig::default();
        let due = d(2024, 1, 1);
        let today = d(2024, 3, 1);
        assert_eq!(
            aging_status(due, RemediationStatus::InProgress, today, &cfg),
            AgingStatus::Overdue
        );
        assert_eq!(aging_days(due, today), 60);
    }

    #[test]
    fn test_due_soon_window_boundaries() {
        let cfg = AgingConfig {
            due_soon_window_days: 14,
        };
        let today = d(2024, 6, 1);
        // Due today is inside the window, not overdue.
        assert_eq!(
            aging_status(today, RemediationStatus::Planning, today, &cfg),
            AgingStatus::DueSoon
        );
        assert_eq!(
            aging_status(d(2024, 6, 15), RemediationStatus::Planning, today, &cfg),
            AgingStatus::DueSoon
        );
        assert_eq!(
            aging_status(d(2024, 6, 16), RemediationStatus::Planning, today, &cfg),
            AgingStatus::OnTrack
        );
    }

    #[test]
    fn test_window_is_configurable() {
        let today = d(2024, 6, 1);
        let due = d(2024, 6, 20);
        let narrow = AgingConfig {
            due_soon_window_days: 7,
        };
        let wide = AgingConfig {
            due_soon_window_days: 30,
        };
        assert_eq!(
            aging_status(due, RemediationStatus::InProgress, today, &narrow),
            AgingStatus::OnTrack
        );
        assert_eq!(
            aging_status(due, RemediationStatus::InProgress, today, &wide),
            AgingStatus::DueSoon
        );
    }

    #[test]
    fn test_aging_days_not_negative() {
        assert_eq!(aging_days(d(2024, 6, 10), d(2024, 6, 1)), 0);
    }

    #[test]
    fn test_age_buckets() {
        let today = d(2024, 7, 1);
        assert_eq!(age_bucket(d(2024, 6, 25), today), AgeBucket::Days0To30);
        assert_eq!(age_bucket(d(2024, 6, 1), today), AgeBucket::Days0To30);
        assert_eq!(age_bucket(d(2024, 5, 10), today), AgeBucket::Days31To60);
        assert_eq!(age_bucket(d(2024, 4, 10), today), AgeBucket::Days61To90);
        assert_eq!(age_bucket(d(2024, 1, 1), today), AgeBucket::Days90Plus);
    }
}
