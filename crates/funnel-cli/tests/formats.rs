//! Profile totals do not depend on the input format.

use std::fs;

use funnel_core::calculate;
use funnel_ingest::load_table;
use funnel_model::ColumnMapping;
use tempfile::TempDir;

#[test]
fn blank_sheet_rows_count_as_profiles_in_every_format() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("tracker.csv");
    let tsv = dir.path().join("tracker.tsv");
    let json = dir.path().join("tracker.json");
    fs::write(&csv, "VENDOR,Screening Done\nAcme,Yes\n,\nBeta,No\n").unwrap();
    fs::write(&tsv, "VENDOR\tScreening Done\nAcme\tYes\n\t\nBeta\tNo\n").unwrap();
    fs::write(
        &json,
        r#"{"success":true,"headers":["VENDOR","Screening Done"],"rows":[["Acme","Yes"],[null,""],["Beta","No"]]}"#,
    )
    .unwrap();

    let mapping = ColumnMapping::defaults();
    for path in [&csv, &tsv, &json] {
        let table = load_table(path).unwrap();
        let result = calculate(&table.rows, &mapping);
        assert_eq!(result.total_profiles, 3, "{}", path.display());
        assert_eq!(result.rows_without_data, 1, "{}", path.display());
        assert_eq!(result.profiles_with_data(), 2, "{}", path.display());
    }
}
