//! Aggregate result records produced by one aggregation pass.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::{PendingStage, ScreeningStatus, Stage};

/// One counter per screening status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningCounts {
    pub pending: usize,
    pub feedback_pending: usize,
    pub selected: usize,
    pub rejected: usize,
    pub hold: usize,
    pub no_show: usize,
}

impl ScreeningCounts {
    pub fn record(&mut self, status: ScreeningStatus) {
        *self.slot_mut(status) += 1;
    }

    pub fn get(&self, status: ScreeningStatus) -> usize {
        match status {
            ScreeningStatus::Pending => self.pending,
            ScreeningStatus::FeedbackPending => self.feedback_pending,
            ScreeningStatus::Selected => self.selected,
            ScreeningStatus::Rejected => self.rejected,
            ScreeningStatus::Hold => self.hold,
            ScreeningStatus::NoShow => self.no_show,
        }
    }

    pub fn total(&self) -> usize {
        ScreeningStatus::ALL.iter().map(|status| self.get(*status)).sum()
    }

    fn slot_mut(&mut self, status: ScreeningStatus) -> &mut usize {
        match status {
            ScreeningStatus::Pending => &mut self.pending,
            ScreeningStatus::FeedbackPending => &mut self.feedback_pending,
            ScreeningStatus::Selected => &mut self.selected,
            ScreeningStatus::Rejected => &mut self.rejected,
            ScreeningStatus::Hold => &mut self.hold,
            ScreeningStatus::NoShow => &mut self.no_show,
        }
    }
}

/// Candidates waiting at each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCounts {
    pub rapid_fire: usize,
    pub l1: usize,
    pub l2: usize,
    pub client: usize,
    pub offer: usize,
}

impl PendingCounts {
    pub fn record(&mut self, stage: PendingStage) {
        match stage {
            PendingStage::RapidFire => self.rapid_fire += 1,
            PendingStage::L1 => self.l1 += 1,
            PendingStage::L2 => self.l2 += 1,
            PendingStage::Client => self.client += 1,
            PendingStage::Offer => self.offer += 1,
        }
    }

    pub fn get(&self, stage: PendingStage) -> usize {
        match stage {
            PendingStage::RapidFire => self.rapid_fire,
            PendingStage::L1 => self.l1,
            PendingStage::L2 => self.l2,
            PendingStage::Client => self.client,
            PendingStage::Offer => self.offer,
        }
    }
}

/// Funnel counters for one interview round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub reached: usize,
    pub selected: usize,
    pub rejected: usize,
    pub dropped: usize,
    pub reschedule: usize,
    pub to_be_scheduled: usize,
    pub feedback_pending: usize,
    pub in_progress: usize,
}

/// Pending/selected/rejected counts for one stage inside a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTally {
    pub pending: usize,
    pub selected: usize,
    pub rejected: usize,
}

/// Breakdown kept per vendor and per technology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    pub profiles: usize,
    pub screened: usize,
    pub screening: ScreeningCounts,
    pub rapid_fire: StageTally,
    pub l1: StageTally,
    pub l2: StageTally,
    pub client: StageTally,
    pub offer_pending: usize,
    pub offers: usize,
    pub onboarded: usize,
}

impl BucketStats {
    pub fn stage(&self, stage: Stage) -> &StageTally {
        match stage {
            Stage::RapidFire => &self.rapid_fire,
            Stage::L1 => &self.l1,
            Stage::L2 => &self.l2,
            Stage::Client => &self.client,
        }
    }

    pub fn stage_mut(&mut self, stage: Stage) -> &mut StageTally {
        match stage {
            Stage::RapidFire => &mut self.rapid_fire,
            Stage::L1 => &mut self.l1,
            Stage::L2 => &mut self.l2,
            Stage::Client => &mut self.client,
        }
    }
}

/// Experience buckets over half-open year ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "0-3 years")]
    UnderThree,
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "5-10 years")]
    FiveToTen,
    #[serde(rename = "10+ years")]
    TenPlus,
}

impl ExperienceBracket {
    pub const ALL: [ExperienceBracket; 4] = [
        ExperienceBracket::UnderThree,
        ExperienceBracket::ThreeToFive,
        ExperienceBracket::FiveToTen,
        ExperienceBracket::TenPlus,
    ];

    /// `[0,3)`, `[3,5)`, `[5,10)`, `[10,∞)`. Negative years fall in the first bracket.
    pub fn for_years(years: f64) -> Self {
        if years < 3.0 {
            ExperienceBracket::UnderThree
        } else if years < 5.0 {
            ExperienceBracket::ThreeToFive
        } else if years < 10.0 {
            ExperienceBracket::FiveToTen
        } else {
            ExperienceBracket::TenPlus
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBracket::UnderThree => "0-3 years",
            ExperienceBracket::ThreeToFive => "3-5 years",
            ExperienceBracket::FiveToTen => "5-10 years",
            ExperienceBracket::TenPlus => "10+ years",
        }
    }
}

impl fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything one aggregation pass produces. Built fresh on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Every input row, including rows without data.
    pub total_profiles: usize,
    pub rows_without_data: usize,
    pub interviews_scheduled: usize,
    pub total_offers: usize,
    pub total_onboarded: usize,
    pub screening: ScreeningCounts,
    pub pending: PendingCounts,
    pub rapid_fire: StageCounts,
    pub l1: StageCounts,
    pub l2: StageCounts,
    pub client: StageCounts,
    pub technical_rejections: usize,
    pub hr_rejections: usize,
    /// Screened candidates whose feedback text matched no known outcome.
    pub unrecognized_feedback: usize,
    pub vendors: BTreeMap<String, BucketStats>,
    pub technologies: BTreeMap<String, BucketStats>,
    pub experience: BTreeMap<ExperienceBracket, usize>,
}

impl AggregateResult {
    pub fn stage(&self, stage: Stage) -> &StageCounts {
        match stage {
            Stage::RapidFire => &self.rapid_fire,
            Stage::L1 => &self.l1,
            Stage::L2 => &self.l2,
            Stage::Client => &self.client,
        }
    }

    pub fn stage_mut(&mut self, stage: Stage) -> &mut StageCounts {
        match stage {
            Stage::RapidFire => &mut self.rapid_fire,
            Stage::L1 => &mut self.l1,
            Stage::L2 => &mut self.l2,
            Stage::Client => &mut self.client,
        }
    }

    pub fn no_show_count(&self) -> usize {
        self.screening.no_show
    }

    /// Rows that went through classification.
    pub fn profiles_with_data(&self) -> usize {
        self.total_profiles - self.rows_without_data
    }
}
