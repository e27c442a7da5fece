pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod summary;
pub mod table;

pub use error::{ModelError, Result};
pub use mapping::{ColumnMapping, FieldBinding, SemanticField};
pub use pipeline::{
    OutcomeKind, PendingStage, RejectionKind, ScreeningResult, ScreeningStatus, Stage,
    StageOutcome,
};
pub use summary::{
    AggregateResult, BucketStats, ExperienceBracket, PendingCounts, ScreeningCounts,
    StageCounts, StageTally,
};
pub use table::{CellValue, Row, Table, normalize_header};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_matches_pipeline() {
        assert!(Stage::RapidFire < Stage::L1);
        assert!(Stage::L2 < Stage::Client);
        assert_eq!(Stage::Client.next(), PendingStage::Offer);
    }

    #[test]
    fn screening_counts_total() {
        let mut counts = ScreeningCounts::default();
        counts.record(ScreeningStatus::Selected);
        counts.record(ScreeningStatus::NoShow);
        counts.record(ScreeningStatus::NoShow);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(ScreeningStatus::NoShow), 2);
    }
}
