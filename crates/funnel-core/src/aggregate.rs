//! Funnel aggregation over a materialized table.
//!
//! [`calculate`] is a fold: every row is classified independently and
//! folded into an accumulator that lives only for the duration of the
//! call. Nothing is cached between calls.

use std::time::Instant;

use funnel_model::{
    AggregateResult, BucketStats, ColumnMapping, ExperienceBracket, PendingStage, RejectionKind,
    Row, ScreeningResult, SemanticField, Stage, StageCounts, StageOutcome,
};
use tracing::{debug, info, info_span};

use crate::normalize::{classify_rejection_type, has_value, is_yes, parse_experience};
use crate::stage::{
    StageValues, is_unrecognized_feedback, pending_stage, screening_status, stage_outcome,
};

/// Vendor bucket for rows without a vendor.
pub const UNKNOWN_VENDOR: &str = "Unknown";
/// Technology bucket for rows without a technology.
pub const OTHER_TECHNOLOGY: &str = "Other";

/// Everything the aggregation derives from one row.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSummary {
    pub vendor: String,
    pub technology: String,
    pub screening: ScreeningResult,
    pub unrecognized_feedback: bool,
    /// Set only for candidates that passed screening.
    pub pending: Option<PendingStage>,
    /// Outcomes per stage; all `not_reached` unless screening passed.
    pub stages: [(Stage, StageOutcome); 4],
    pub offer_released: bool,
    pub onboarded: bool,
    pub rejection: Option<RejectionKind>,
    pub experience_years: f64,
}

impl CandidateSummary {
    pub fn experience_bracket(&self) -> ExperienceBracket {
        ExperienceBracket::for_years(self.experience_years)
    }
}

/// True when at least one bound field of the row carries a value.
pub fn row_has_data(row: &Row, mapping: &ColumnMapping) -> bool {
    SemanticField::ALL
        .into_iter()
        .any(|field| has_value(&mapping.value(row, field)))
}

/// Classifies one candidate row.
pub fn summarize_candidate(row: &Row, mapping: &ColumnMapping) -> CandidateSummary {
    let text = move |field| mapping.value(row, field);

    let feedback = text(SemanticField::ScreeningFeedback);
    let screening = screening_status(&text(SemanticField::ScreeningDone), &feedback);
    let unrecognized_feedback = is_unrecognized_feedback(&screening, &feedback);

    let rapid_fire = text(SemanticField::RapidFire);
    let l1 = text(SemanticField::L1);
    let l2 = text(SemanticField::L2);
    let client = text(SemanticField::ClientRound);
    let offer = text(SemanticField::OfferReleased);
    let values = StageValues {
        rapid_fire: &rapid_fire,
        l1: &l1,
        l2: &l2,
        client: &client,
        offer: &offer,
    };

    let (pending, stages) = if screening.can_progress() {
        let stages = values
            .stages()
            .map(|(stage, value)| (stage, stage_outcome(value)));
        (pending_stage(&values), stages)
    } else {
        (None, Stage::ALL.map(|stage| (stage, StageOutcome::not_reached())))
    };

    CandidateSummary {
        vendor: label_or(&text(SemanticField::Vendor), UNKNOWN_VENDOR),
        technology: label_or(&text(SemanticField::Technology), OTHER_TECHNOLOGY),
        screening,
        unrecognized_feedback,
        pending,
        stages,
        offer_released: is_yes(&offer),
        onboarded: is_yes(&text(SemanticField::Onboarded)),
        rejection: classify_rejection_type(&text(SemanticField::RejectionType)),
        experience_years: parse_experience(&text(SemanticField::Experience)),
    }
}

fn label_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Mutable accumulator scoped to a single [`calculate`] call.
#[derive(Debug, Default)]
pub struct FunnelAccumulator {
    result: AggregateResult,
}

impl FunnelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row into the totals; `None` for a row without data.
    pub fn push_row(&mut self, row: &Row, mapping: &ColumnMapping) -> Option<CandidateSummary> {
        self.result.total_profiles += 1;
        if !row_has_data(row, mapping) {
            self.result.rows_without_data += 1;
            return None;
        }
        let candidate = summarize_candidate(row, mapping);
        self.push_candidate(&candidate);
        Some(candidate)
    }

    pub fn push_candidate(&mut self, candidate: &CandidateSummary) {
        let result = &mut self.result;

        result.screening.record(candidate.screening.status);
        if candidate.screening.screened {
            result.interviews_scheduled += 1;
        }
        if candidate.unrecognized_feedback {
            result.unrecognized_feedback += 1;
        }
        if let Some(stage) = candidate.pending {
            result.pending.record(stage);
        }
        for (stage, outcome) in &candidate.stages {
            record_stage_outcome(result.stage_mut(*stage), outcome);
        }
        if candidate.offer_released {
            result.total_offers += 1;
        }
        if candidate.onboarded {
            result.total_onboarded += 1;
        }
        match candidate.rejection {
            Some(RejectionKind::Technical) => result.technical_rejections += 1,
            Some(RejectionKind::Hr) => result.hr_rejections += 1,
            None => {}
        }

        record_bucket(
            result.vendors.entry(candidate.vendor.clone()).or_default(),
            candidate,
        );
        record_bucket(
            result
                .technologies
                .entry(candidate.technology.clone())
                .or_default(),
            candidate,
        );
        *result
            .experience
            .entry(candidate.experience_bracket())
            .or_default() += 1;
    }

    pub fn finish(self) -> AggregateResult {
        self.result
    }
}

fn record_stage_outcome(counts: &mut StageCounts, outcome: &StageOutcome) {
    if !outcome.has_value {
        return;
    }
    counts.reached += 1;
    if outcome.is_select {
        counts.selected += 1;
    } else if outcome.is_reject {
        counts.rejected += 1;
    } else if outcome.is_dropped {
        counts.dropped += 1;
    } else if outcome.is_reschedule {
        counts.reschedule += 1;
    } else if outcome.is_to_be_scheduled {
        counts.to_be_scheduled += 1;
    } else if outcome.is_feedback_pending {
        counts.feedback_pending += 1;
    }
    if outcome.is_in_progress {
        counts.in_progress += 1;
    }
}

fn record_bucket(bucket: &mut BucketStats, candidate: &CandidateSummary) {
    bucket.profiles += 1;
    if candidate.screening.screened {
        bucket.screened += 1;
    }
    bucket.screening.record(candidate.screening.status);
    match candidate.pending {
        Some(PendingStage::RapidFire) => bucket.rapid_fire.pending += 1,
        Some(PendingStage::L1) => bucket.l1.pending += 1,
        Some(PendingStage::L2) => bucket.l2.pending += 1,
        Some(PendingStage::Client) => bucket.client.pending += 1,
        Some(PendingStage::Offer) => bucket.offer_pending += 1,
        None => {}
    }
    for (stage, outcome) in &candidate.stages {
        let tally = bucket.stage_mut(*stage);
        if outcome.is_select {
            tally.selected += 1;
        }
        if outcome.is_reject {
            tally.rejected += 1;
        }
    }
    if candidate.offer_released {
        bucket.offers += 1;
    }
    if candidate.onboarded {
        bucket.onboarded += 1;
    }
}

/// Aggregates funnel metrics over `rows`.
///
/// Pure and total: any cell content degrades to a defined classification,
/// and calling twice with the same input yields the same result.
pub fn calculate(rows: &[Row], mapping: &ColumnMapping) -> AggregateResult {
    let span = info_span!("calculate", rows = rows.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut accumulator = FunnelAccumulator::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(candidate) = accumulator.push_row(row, mapping) else {
            continue;
        };
        if candidate.unrecognized_feedback {
            debug!(row = index, "unrecognized screening feedback, counted as feedback pending");
        }
    }
    let result = accumulator.finish();

    info!(
        profiles = result.total_profiles,
        without_data = result.rows_without_data,
        screened = result.interviews_scheduled,
        offers = result.total_offers,
        unrecognized_feedback = result.unrecognized_feedback,
        duration_ms = start.elapsed().as_millis(),
        "funnel aggregation complete"
    );
    result
}
