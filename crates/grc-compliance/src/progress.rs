//! Progress mapping
//!
//! Progress drives a linear fill; there is no non-linear mapping. When an
//! item has never reported an explicit percentage, a coarse estimate is
//! inferred from status alone.

use crate::item::{RemediationItem, RemediationStatus};
use grc_common::ProgressPercent;

/// Status-derived progress estimate, used only when no explicit percentage
/// exists
pub fn fallback_progress(status: RemediationStatus) -> ProgressPercent {
    let pct = match status {
        RemediationStatus::Completed | RemediationStatus::Closed => 100,
        RemediationStatus::UnderReview => 80,
        RemediationStatus::InProgress => 60,
        RemediationStatus::NotStarted => 10,
        _ => 0,
    };
    // Table values are all within range.
    ProgressPercent::new(pct).unwrap_or_default()
}

/// Explicit progress when reported, otherwise the status fallback
pub fn effective_progress(item: &RemediationItem) -> ProgressPercent {
    item.progress.unwrap_or_else(|| fallback_progress(item.status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_table() {
        assert_eq!(fallback_progress(RemediationStatus::Completed).value(), 100);
        assert_eq!(fallback_progress(RemediationStatus::Closed).value(), 100);
        assert_eq!(
            fallback_progress(RemediationStatus::UnderReview).value(),
            80
        );
        assert_eq!(fallback_progress(RemediationStatus::InProgress).value(), 60);
        assert_eq!(fallback_progress(RemediationStatus::NotStarted).value(), 10);
        assert_eq!(fallback_progress(RemediationStatus::Planning).value(), 0);
        assert_eq!(fallback_progress(RemediationStatus::OnHold).value(), 0);
        assert_eq!(fallback_progress(RemediationStatus::Deferred).value(), 0);
        assert_eq!(fallback_progress(RemediationStatus::Cancelled).value(), 0);
    }
}
