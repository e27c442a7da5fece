//! Per-candidate pipeline state derived from raw cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the screening call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreeningStatus {
    /// Screening not done yet.
    Pending,
    /// Screened, no usable feedback recorded.
    FeedbackPending,
    Selected,
    Rejected,
    Hold,
    /// Candidate did not turn up (or screening marked "No").
    #[serde(rename = "noshow")]
    NoShow,
}

impl ScreeningStatus {
    pub const ALL: [ScreeningStatus; 6] = [
        ScreeningStatus::Pending,
        ScreeningStatus::FeedbackPending,
        ScreeningStatus::Selected,
        ScreeningStatus::Rejected,
        ScreeningStatus::Hold,
        ScreeningStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningStatus::Pending => "pending",
            ScreeningStatus::FeedbackPending => "feedbackPending",
            ScreeningStatus::Selected => "selected",
            ScreeningStatus::Rejected => "rejected",
            ScreeningStatus::Hold => "hold",
            ScreeningStatus::NoShow => "noshow",
        }
    }
}

impl fmt::Display for ScreeningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screening status plus the flags the aggregation needs.
///
/// Only a selected candidate may progress, so `can_progress` is derived
/// from the status instead of stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub status: ScreeningStatus,
    /// The screening call took place ("Screening Done" = yes).
    pub screened: bool,
}

impl ScreeningResult {
    pub fn new(status: ScreeningStatus, screened: bool) -> Self {
        Self { status, screened }
    }

    pub fn can_progress(&self) -> bool {
        self.status == ScreeningStatus::Selected
    }
}

/// Interview rounds after screening, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    RapidFire,
    L1,
    L2,
    Client,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::RapidFire, Stage::L1, Stage::L2, Stage::Client];

    /// Where a candidate selected at this stage waits next.
    pub fn next(&self) -> PendingStage {
        match self {
            Stage::RapidFire => PendingStage::L1,
            Stage::L1 => PendingStage::L2,
            Stage::L2 => PendingStage::Client,
            Stage::Client => PendingStage::Offer,
        }
    }

    /// Pending marker for a candidate still inside this stage.
    pub fn pending(&self) -> PendingStage {
        match self {
            Stage::RapidFire => PendingStage::RapidFire,
            Stage::L1 => PendingStage::L1,
            Stage::L2 => PendingStage::L2,
            Stage::Client => PendingStage::Client,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::RapidFire => "Rapid Fire",
            Stage::L1 => "L1",
            Stage::L2 => "L2",
            Stage::Client => "Client",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single stage at which a progressing candidate awaits action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PendingStage {
    #[serde(rename = "rf")]
    RapidFire,
    #[serde(rename = "l1")]
    L1,
    #[serde(rename = "l2")]
    L2,
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "offer")]
    Offer,
}

impl PendingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PendingStage::RapidFire => "rf",
            PendingStage::L1 => "l1",
            PendingStage::L2 => "l2",
            PendingStage::Client => "client",
            PendingStage::Offer => "offer",
        }
    }
}

impl fmt::Display for PendingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary classification of a non-empty stage cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeKind {
    Select,
    Reject,
    Dropped,
    ToBeScheduled,
    Reschedule,
    FeedbackPending,
    /// Contains "pending" but none of the specific in-progress markers.
    InProgress,
    /// Text that matches no rule; a terminal, uncounted outcome.
    Other,
}

impl OutcomeKind {
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            OutcomeKind::ToBeScheduled
                | OutcomeKind::Reschedule
                | OutcomeKind::FeedbackPending
                | OutcomeKind::InProgress
        )
    }
}

/// Flag view of a stage cell.
///
/// `has_value == false` implies every other flag is false. When a value is
/// present at most one of the primary flags is set; `is_in_progress`
/// mirrors the in-progress family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOutcome {
    pub has_value: bool,
    pub is_select: bool,
    pub is_reject: bool,
    pub is_dropped: bool,
    pub is_reschedule: bool,
    pub is_to_be_scheduled: bool,
    pub is_feedback_pending: bool,
    pub is_in_progress: bool,
}

impl StageOutcome {
    pub fn not_reached() -> Self {
        Self::default()
    }

    pub fn from_kind(kind: OutcomeKind) -> Self {
        Self {
            has_value: true,
            is_select: kind == OutcomeKind::Select,
            is_reject: kind == OutcomeKind::Reject,
            is_dropped: kind == OutcomeKind::Dropped,
            is_reschedule: kind == OutcomeKind::Reschedule,
            is_to_be_scheduled: kind == OutcomeKind::ToBeScheduled,
            is_feedback_pending: kind == OutcomeKind::FeedbackPending,
            is_in_progress: kind.is_in_progress(),
        }
    }
}

/// Reason category recorded in the rejection-type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionKind {
    Technical,
    Hr,
}
