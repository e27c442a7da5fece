//! Per-candidate pipeline resolution: screening status and pending stage.

use funnel_model::{PendingStage, ScreeningResult, ScreeningStatus, Stage, StageOutcome};

use crate::normalize::{
    classify_outcome, has_value, is_hold, is_in_progress, is_no, is_no_show, is_reject, is_select,
    is_skipped, is_truly_empty, is_yes,
};

/// Screening state machine; the first matching rule wins.
///
/// Unrecognized non-empty feedback resolves to `FeedbackPending`.
pub fn screening_status(screening_done: &str, screening_feedback: &str) -> ScreeningResult {
    if is_skipped(screening_done) {
        return ScreeningResult::new(ScreeningStatus::Pending, false);
    }
    if is_no(screening_done) {
        return ScreeningResult::new(ScreeningStatus::NoShow, false);
    }
    if !is_yes(screening_done) {
        return ScreeningResult::new(ScreeningStatus::Pending, false);
    }

    let status = if is_skipped(screening_feedback) {
        ScreeningStatus::FeedbackPending
    } else if is_select(screening_feedback) {
        ScreeningStatus::Selected
    } else if is_reject(screening_feedback) {
        ScreeningStatus::Rejected
    } else if is_hold(screening_feedback) {
        ScreeningStatus::Hold
    } else if is_no_show(screening_feedback) {
        ScreeningStatus::NoShow
    } else {
        ScreeningStatus::FeedbackPending
    };
    ScreeningResult::new(status, true)
}

/// True when a screened candidate's feedback text matched no known outcome.
pub fn is_unrecognized_feedback(result: &ScreeningResult, screening_feedback: &str) -> bool {
    result.screened
        && result.status == ScreeningStatus::FeedbackPending
        && has_value(screening_feedback)
}

/// Raw text of the post-screening cells of one candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageValues<'a> {
    pub rapid_fire: &'a str,
    pub l1: &'a str,
    pub l2: &'a str,
    pub client: &'a str,
    pub offer: &'a str,
}

impl<'a> StageValues<'a> {
    pub fn get(&self, stage: Stage) -> &'a str {
        match stage {
            Stage::RapidFire => self.rapid_fire,
            Stage::L1 => self.l1,
            Stage::L2 => self.l2,
            Stage::Client => self.client,
        }
    }

    /// Stages paired with their cells, in pipeline order.
    pub fn stages(&self) -> [(Stage, &'a str); 4] {
        Stage::ALL.map(|stage| (stage, self.get(stage)))
    }
}

/// Where a progressing candidate currently waits, if anywhere.
///
/// The furthest stage that carries a value decides: selected there means
/// pending at the next stage, in progress means pending at that stage,
/// anything else ends the pipeline. Earlier empty cells are bypassed, not
/// stalled.
///
/// With no value anywhere, the first truly empty cell is the pending
/// stage; explicit skip markers are passed over. If every stage is
/// explicitly skipped the candidate is pending nowhere.
///
/// Only meaningful when screening allows progression.
pub fn pending_stage(values: &StageValues<'_>) -> Option<PendingStage> {
    if is_yes(values.offer) {
        return None;
    }

    let stages = values.stages();
    if let Some((stage, value)) = stages.iter().rev().find(|(_, value)| has_value(value)) {
        return if is_select(value) {
            Some(stage.next())
        } else if is_in_progress(value) {
            Some(stage.pending())
        } else {
            None
        };
    }

    stages
        .iter()
        .find(|(_, value)| is_truly_empty(value))
        .map(|(stage, _)| stage.pending())
}

/// Flag view of one stage cell, see [`classify_outcome`] for precedence.
pub fn stage_outcome(value: &str) -> StageOutcome {
    classify_outcome(value).map_or_else(StageOutcome::not_reached, StageOutcome::from_kind)
}
