//! Stage classification and funnel aggregation.
//!
//! - [`normalize`]: total predicates over raw cell text.
//! - [`stage`]: screening status and pending-stage resolution per candidate.
//! - [`aggregate`]: the fold over all rows into an [`AggregateResult`].
//!
//! Nothing in this crate is fallible or performs I/O.

#![deny(unsafe_code)]

pub mod aggregate;
pub mod normalize;
pub mod stage;

pub use aggregate::{
    CandidateSummary, FunnelAccumulator, OTHER_TECHNOLOGY, UNKNOWN_VENDOR, calculate,
    row_has_data, summarize_candidate,
};
pub use funnel_model::AggregateResult;
pub use normalize::{
    OUTCOME_RULES, classify_outcome, classify_rejection_type, has_value, is_dropped_or_cancelled,
    is_empty, is_explicitly_skipped, is_feedback_pending, is_hold, is_in_progress, is_no,
    is_no_show, is_reject, is_reschedule, is_select, is_skipped, is_to_be_scheduled,
    is_truly_empty, is_yes, normalize_outcome, parse_experience,
};
pub use stage::{
    StageValues, is_unrecognized_feedback, pending_stage, screening_status, stage_outcome,
};
