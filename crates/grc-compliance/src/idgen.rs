//! Human-readable reference ID generation
//!
//! References take the form `PREFIX-NNNNNN` or `PREFIX-YEAR-NAME-NNNNNN`.
//! The next suffix is max-of-existing + 1 (not count + 1), left-padded to
//! six digits. This is a best-effort allocator: two concurrent creators can
//! race to the same suffix, and the timestamp fallback exists for when the
//! existing-id listing is unavailable.

use chrono::{DateTime, Utc};

/// Suffix width in digits
pub const SUFFIX_WIDTH: usize = 6;

/// Maximum length of a sanitized parent-entity name
pub const PARENT_NAME_MAX: usize = 20;

/// Sanitize a parent-entity name for embedding in a reference:
/// truncate, trim, collapse whitespace runs to `-`, uppercase.
pub fn sanitize_parent_name(name: &str) -> String {
    let truncated: String = name.chars().take(PARENT_NAME_MAX).collect();
    let trimmed = truncated.trim();
    if trimmed.is_empty() {
        return "UNKNOWN".into();
    }
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_uppercase()
}

/// Next reference for `prefix`, scanning `existing` for the highest
/// numeric suffix among ids carrying the same prefix
pub fn next_reference<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let lead = format!("{prefix}-");
    let mut max_suffix: u64 = 0;
    for id in existing {
        if let Some(rest) = id.strip_prefix(&lead) {
            if let Ok(n) = rest.parse::<u64>() {
                if n > max_suffix {
                    max_suffix = n;
                }
            }
        }
    }
    format!("{prefix}-{:0width$}", max_suffix + 1, width = SUFFIX_WIDTH)
}

/// Next finding reference of the form `FIND-YEAR-NAME-NNNNNN`
pub fn next_finding_reference<'a>(
    year: i32,
    parent_name: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> String {
    let prefix = format!("FIND-{year}-{}", sanitize_parent_name(parent_name));
    next_reference(&prefix, existing)
}

/// Timestamp-derived fallback: last six digits of the millisecond clock
pub fn fallback_reference(prefix: &str, now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().unsigned_abs().to_string();
    let tail = &millis[millis.len().saturating_sub(SUFFIX_WIDTH)..];
    format!("{prefix}-{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_next_is_max_plus_one_not_count_plus_one() {
        let existing = ["FIND-2024-X-000001", "FIND-2024-X-000003"];
        let next = next_reference("FIND-2024-X", existing);
        assert_eq!(next, "FIND-2024-X-000004");
    }

    #[test]
    fn test_first_reference() {
        let next = next_reference("NESA-FINDING", []);
        assert_eq!(next, "NESA-FINDING-000001");
    }

    #[test]
    fn test_foreign_prefixes_ignored() {
        let existing = ["NESA-FINDING-000009", "HIPAA-REM-000042", "garbage"];
        assert_eq!(
            next_reference("NESA-FINDING", existing),
            "NESA-FINDING-000010"
        );
        assert_eq!(next_reference("HIPAA-REM", existing), "HIPAA-REM-000043");
    }

    #[test]
    fn test_sanitize_parent_name() {
        assert_eq!(
            sanitize_parent_name("Initial ISO 27001 Certification Assessment"),
            "INITIAL-ISO-27001-CE"
        );
        assert_eq!(sanitize_parent_name("  q1   audit "), "Q1-AUDIT");
        assert_eq!(sanitize_parent_name(""), "UNKNOWN");
        assert_eq!(sanitize_parent_name("   "), "UNKNOWN");
    }

    #[test]
    fn test_finding_reference_shape() {
        let r = next_finding_reference(2024, "SOC Review", []);
        assert_eq!(r, "FIND-2024-SOC-REVIEW-000001");
    }

    #[test]
    fn test_fallback_uses_clock_tail() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let r = fallback_reference("FIND-2024-UNKNOWN", now);
        let suffix = r.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_WIDTH);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
