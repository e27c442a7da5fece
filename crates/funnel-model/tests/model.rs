//! Tests for funnel-model types.

use std::collections::BTreeMap;

use funnel_model::{
    AggregateResult, CellValue, ColumnMapping, ExperienceBracket, FieldBinding, ModelError,
    PendingStage, Row, ScreeningResult, ScreeningStatus, SemanticField, StageTally,
};

#[test]
fn cell_text_mirrors_sheet_values() {
    assert_eq!(CellValue::Missing.to_text(), "");
    assert_eq!(CellValue::Text("  Select ".to_string()).to_text(), "Select");
    assert_eq!(CellValue::Number(1.0).to_text(), "1");
    assert_eq!(CellValue::Number(3.5).to_text(), "3.5");
    assert_eq!(CellValue::Number(10.0).to_text(), "10");
    assert_eq!(CellValue::Bool(true).to_text(), "yes");
    assert_eq!(CellValue::Bool(false).to_text(), "");
}

#[test]
fn blank_text_becomes_missing() {
    assert!(CellValue::text("   ").is_missing());
    assert!(!CellValue::text("NA").is_missing());
}

#[test]
fn default_mapping_binds_every_field() {
    let mapping = ColumnMapping::defaults();
    for field in SemanticField::ALL {
        assert_eq!(mapping.header(field), Some(field.default_header()));
    }
    assert_eq!(mapping.header(SemanticField::Experience), Some("YoE"));
    assert_eq!(mapping.header(SemanticField::ScreeningFeedback), Some("Feedback"));
}

#[test]
fn unbound_field_reads_empty() {
    let row = Row::new().with("VENDOR", "Acme");
    let mapping = ColumnMapping::unbound();
    assert_eq!(mapping.value(&row, SemanticField::Vendor), "");

    let mapping = ColumnMapping::defaults();
    assert_eq!(mapping.value(&row, SemanticField::Vendor), "Acme");
    // Bound header that the row does not carry.
    assert_eq!(mapping.value(&row, SemanticField::L2), "");
}

#[test]
fn merge_layers_overrides_on_defaults() {
    let mut mapping = ColumnMapping::defaults();
    mapping.merge([
        (SemanticField::Vendor, "Source"),
        (SemanticField::RejectionType, ""),
    ]);
    assert_eq!(mapping.header(SemanticField::Vendor), Some("Source"));
    assert_eq!(mapping.header(SemanticField::RejectionType), None);
    assert_eq!(mapping.header(SemanticField::L1), Some("L1"));
}

#[test]
fn apply_override_parses_field_and_header() {
    let mut mapping = ColumnMapping::defaults();
    let field = mapping.apply_override("client_round=Client Interview").unwrap();
    assert_eq!(field, SemanticField::ClientRound);
    assert_eq!(
        mapping.header(SemanticField::ClientRound),
        Some("Client Interview")
    );

    let err = mapping.apply_override("clientRound").unwrap_err();
    assert!(matches!(err, ModelError::InvalidOverride(_)));
    let err = mapping.apply_override("budget=Budget").unwrap_err();
    assert!(matches!(err, ModelError::UnknownField(_)));
}

#[test]
fn resolve_reports_binding_status() {
    let mut mapping = ColumnMapping::defaults();
    mapping.unbind(SemanticField::Onboarded);
    let headers = vec!["VENDOR".to_string(), "L1".to_string()];
    let resolved: BTreeMap<SemanticField, FieldBinding> =
        mapping.resolve(&headers).into_iter().collect();

    assert_eq!(
        resolved[&SemanticField::Vendor],
        FieldBinding::Bound("VENDOR".to_string())
    );
    assert_eq!(
        resolved[&SemanticField::L2],
        FieldBinding::MissingHeader("L2".to_string())
    );
    assert_eq!(resolved[&SemanticField::Onboarded], FieldBinding::Unbound);
}

#[test]
fn mapping_serializes_with_camel_case_keys() {
    let mapping = ColumnMapping::unbound()
        .with(SemanticField::ScreeningDone, "Screened?")
        .with(SemanticField::ClientRound, "Client");
    let json = serde_json::to_string(&mapping).expect("serialize mapping");
    assert_eq!(json, r#"{"screeningDone":"Screened?","clientRound":"Client"}"#);
}

#[test]
fn only_selected_screening_progresses() {
    for status in ScreeningStatus::ALL {
        let result = ScreeningResult::new(status, true);
        assert_eq!(result.can_progress(), status == ScreeningStatus::Selected);
    }
}

#[test]
fn pending_stage_serializes_short_names() {
    let json = serde_json::to_string(&[PendingStage::RapidFire, PendingStage::Offer]).unwrap();
    assert_eq!(json, r#"["rf","offer"]"#);
}

#[test]
fn experience_bracket_boundaries() {
    assert_eq!(ExperienceBracket::for_years(0.0), ExperienceBracket::UnderThree);
    assert_eq!(ExperienceBracket::for_years(2.99), ExperienceBracket::UnderThree);
    assert_eq!(ExperienceBracket::for_years(3.0), ExperienceBracket::ThreeToFive);
    assert_eq!(ExperienceBracket::for_years(9.99), ExperienceBracket::FiveToTen);
    assert_eq!(ExperienceBracket::for_years(10.0), ExperienceBracket::TenPlus);
}

#[test]
fn stage_tally_shape() {
    let tally = StageTally {
        pending: 1,
        selected: 2,
        rejected: 0,
    };
    insta::assert_json_snapshot!(tally, @r#"
    {
      "pending": 1,
      "selected": 2,
      "rejected": 0
    }
    "#);
}

#[test]
fn aggregate_result_round_trips_through_json() {
    let mut result = AggregateResult {
        total_profiles: 3,
        ..AggregateResult::default()
    };
    result.experience.insert(ExperienceBracket::TenPlus, 2);
    result.vendors.entry("Acme".to_string()).or_default().profiles = 3;

    let json = serde_json::to_string(&result).expect("serialize result");
    assert!(json.contains(r#""10+ years":2"#));
    let round: AggregateResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}
