//! Cell value classification.
//!
//! Tracker cells are free text typed by recruiters: "RF Select",
//! "Reject - No-show", "TB Reschedule", "NA". Every predicate here is a
//! total function over the trimmed text of a cell and matches by
//! substring, not equality.
//!
//! The outcome families overlap textually, so classification walks a
//! single ordered rule table ([`OUTCOME_RULES`]) and the first match wins.

use funnel_model::{OutcomeKind, RejectionKind};

/// Markers that mean "intentionally bypassed", as opposed to not filled in yet.
const SKIP_MARKERS: &[&str] = &["na", "n/a", "-", "--", "nil"];
const YES_TOKENS: &[&str] = &["yes", "y", "true", "1"];
const NO_TOKENS: &[&str] = &["no", "n", "false", "0"];

/// Lowercase, trimmed form every outcome predicate matches against.
pub fn normalize_outcome(value: &str) -> String {
    value.trim().to_lowercase()
}

fn contains_any(value: &str, needles: &[&str]) -> bool {
    let normalized = normalize_outcome(value);
    needles.iter().any(|needle| normalized.contains(needle))
}

fn is_one_of(value: &str, tokens: &[&str]) -> bool {
    let normalized = normalize_outcome(value);
    tokens.contains(&normalized.as_str())
}

/// Nothing entered: the stage has not been filled in yet.
pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

/// Same as [`is_empty`]; named for the pending-stage fallback.
pub fn is_truly_empty(value: &str) -> bool {
    is_empty(value)
}

pub fn is_explicitly_skipped(value: &str) -> bool {
    is_one_of(value, SKIP_MARKERS)
}

pub fn is_skipped(value: &str) -> bool {
    is_empty(value) || is_explicitly_skipped(value)
}

pub fn has_value(value: &str) -> bool {
    !is_skipped(value)
}

pub fn is_yes(value: &str) -> bool {
    is_one_of(value, YES_TOKENS)
}

pub fn is_no(value: &str) -> bool {
    is_one_of(value, NO_TOKENS)
}

pub fn is_select(value: &str) -> bool {
    contains_any(value, &["select", "pass", "cleared"])
}

/// "Reject - No-show" is a no-show, not a rejection.
pub fn is_reject(value: &str) -> bool {
    contains_any(value, &["reject"]) && !contains_any(value, &["no-show", "noshow"])
}

pub fn is_hold(value: &str) -> bool {
    contains_any(value, &["hold"])
}

pub fn is_no_show(value: &str) -> bool {
    contains_any(value, &["no-show", "noshow", "no show"])
}

pub fn is_dropped_or_cancelled(value: &str) -> bool {
    contains_any(value, &["drop", "cancel"])
}

pub fn is_to_be_scheduled(value: &str) -> bool {
    contains_any(value, &["tb ", "to be"])
}

pub fn is_reschedule(value: &str) -> bool {
    contains_any(value, &["reschedule", "re-schedule"])
}

pub fn is_feedback_pending(value: &str) -> bool {
    contains_any(value, &["feedback pending", "awaiting"])
}

/// Any in-progress marker, or the bare word "pending".
pub fn is_in_progress(value: &str) -> bool {
    is_reschedule(value)
        || is_to_be_scheduled(value)
        || is_feedback_pending(value)
        || contains_any(value, &["pending"])
}

/// Stage-cell rules in priority order.
///
/// To-be-scheduled precedes reschedule so "RF TB Reschedule" is a
/// to-be-scheduled cell.
pub const OUTCOME_RULES: &[(fn(&str) -> bool, OutcomeKind)] = &[
    (is_select, OutcomeKind::Select),
    (is_reject, OutcomeKind::Reject),
    (is_dropped_or_cancelled, OutcomeKind::Dropped),
    (is_to_be_scheduled, OutcomeKind::ToBeScheduled),
    (is_reschedule, OutcomeKind::Reschedule),
    (is_feedback_pending, OutcomeKind::FeedbackPending),
    (is_in_progress, OutcomeKind::InProgress),
];

/// Primary outcome of a stage cell; `None` when the cell is skipped.
pub fn classify_outcome(value: &str) -> Option<OutcomeKind> {
    if is_skipped(value) {
        return None;
    }
    let kind = OUTCOME_RULES
        .iter()
        .find(|(matches, _)| matches(value))
        .map_or(OutcomeKind::Other, |(_, kind)| *kind);
    Some(kind)
}

/// Rejection reason; technical wins over HR when both appear.
pub fn classify_rejection_type(value: &str) -> Option<RejectionKind> {
    if contains_any(value, &["technical", "tech"]) {
        Some(RejectionKind::Technical)
    } else if contains_any(value, &["hr", "soft"]) {
        Some(RejectionKind::Hr)
    } else {
        None
    }
}

/// Years of experience from free text ("5 yrs", "3.5+", "10").
///
/// Everything but digits and dots is dropped, then the longest leading
/// decimal is parsed. Unparseable input yields 0.
pub fn parse_experience(value: &str) -> f64 {
    let digits: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in digits.char_indices() {
        if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + ch.len_utf8();
    }
    let prefix = digits[..end].trim_end_matches('.');
    if prefix.is_empty() {
        return 0.0;
    }
    let padded = if prefix.starts_with('.') {
        format!("0{prefix}")
    } else {
        prefix.to_string()
    };
    padded.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_markers_are_exact_matches() {
        for marker in ["NA", "n/a", " - ", "--", "Nil"] {
            assert!(is_explicitly_skipped(marker), "{marker}");
            assert!(is_skipped(marker));
            assert!(!has_value(marker));
        }
        assert!(!is_explicitly_skipped("NA - candidate left"));
        assert!(!is_explicitly_skipped(""));
    }

    #[test]
    fn yes_and_no_tokens() {
        assert!(is_yes("Yes"));
        assert!(is_yes(" y "));
        assert!(is_yes("TRUE"));
        assert!(is_yes("1"));
        assert!(!is_yes("yes please"));
        assert!(is_no("No"));
        assert!(is_no("0"));
        assert!(!is_no(""));
    }

    #[test]
    fn reject_yields_to_no_show_text() {
        assert!(is_reject("Rejected"));
        assert!(!is_reject("Reject - No-show"));
        assert!(!is_reject("reject noshow"));
        assert!(is_no_show("Reject - No-show"));
        assert!(is_no_show("Candidate no show"));
    }

    #[test]
    fn to_be_scheduled_wins_over_reschedule() {
        assert_eq!(
            classify_outcome("RF TB Reschedule"),
            Some(OutcomeKind::ToBeScheduled)
        );
        assert_eq!(
            classify_outcome("RF Reschedule"),
            Some(OutcomeKind::Reschedule)
        );
        assert_eq!(
            classify_outcome("Re-schedule"),
            Some(OutcomeKind::Reschedule)
        );
    }

    #[test]
    fn classify_walks_priority_order() {
        assert_eq!(classify_outcome("L1 Select"), Some(OutcomeKind::Select));
        assert_eq!(classify_outcome("Passed"), Some(OutcomeKind::Select));
        assert_eq!(classify_outcome("Cleared"), Some(OutcomeKind::Select));
        assert_eq!(classify_outcome("L2 Reject"), Some(OutcomeKind::Reject));
        assert_eq!(classify_outcome("Dropped"), Some(OutcomeKind::Dropped));
        assert_eq!(classify_outcome("Cancelled"), Some(OutcomeKind::Dropped));
        assert_eq!(
            classify_outcome("Feedback Pending"),
            Some(OutcomeKind::FeedbackPending)
        );
        assert_eq!(
            classify_outcome("Awaiting panel"),
            Some(OutcomeKind::FeedbackPending)
        );
        assert_eq!(classify_outcome("Pending"), Some(OutcomeKind::InProgress));
        assert_eq!(classify_outcome("Completed"), Some(OutcomeKind::Other));
        assert_eq!(classify_outcome("NA"), None);
        assert_eq!(classify_outcome("   "), None);
    }

    #[test]
    fn rejection_type_buckets() {
        assert_eq!(
            classify_rejection_type("Technical"),
            Some(RejectionKind::Technical)
        );
        assert_eq!(
            classify_rejection_type("tech skills"),
            Some(RejectionKind::Technical)
        );
        assert_eq!(classify_rejection_type("HR"), Some(RejectionKind::Hr));
        assert_eq!(
            classify_rejection_type("Soft skills"),
            Some(RejectionKind::Hr)
        );
        assert_eq!(
            classify_rejection_type("HR - tech"),
            Some(RejectionKind::Technical)
        );
        assert_eq!(
            classify_rejection_type("Soft skills, technical gaps"),
            Some(RejectionKind::Technical)
        );
        assert_eq!(classify_rejection_type("Salary"), None);
        assert_eq!(classify_rejection_type(""), None);
    }

    #[test]
    fn experience_parsing() {
        assert_eq!(parse_experience("5"), 5.0);
        assert_eq!(parse_experience("3.5 yrs"), 3.5);
        assert_eq!(parse_experience("10+"), 10.0);
        assert_eq!(parse_experience("3.5.1"), 3.5);
        assert_eq!(parse_experience(".5"), 0.5);
        assert_eq!(parse_experience("4."), 4.0);
        assert_eq!(parse_experience(""), 0.0);
        assert_eq!(parse_experience("fresher"), 0.0);
        assert_eq!(parse_experience("."), 0.0);
    }
}
