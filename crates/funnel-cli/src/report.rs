//! Terminal rendering of funnel reports.

use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use funnel_ingest::TableStats;
use funnel_model::{
    AggregateResult, BucketStats, ExperienceBracket, FieldBinding, PendingStage, ScreeningStatus,
    SemanticField, Stage,
};

/// Every table of a report, in print order.
pub fn report_tables(result: &AggregateResult) -> Vec<(&'static str, Table)> {
    vec![
        ("Overview", overview_table(result)),
        ("Screening", screening_table(result)),
        ("Interview stages", stage_table(result)),
        ("Vendors", bucket_table("Vendor", &result.vendors)),
        ("Technologies", bucket_table("Technology", &result.technologies)),
        ("Experience", experience_table(result)),
    ]
}

pub fn print_report(result: &AggregateResult) {
    for (title, table) in report_tables(result) {
        println!("{title}:");
        println!("{table}");
        println!();
    }
}

pub fn overview_table(result: &AggregateResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Total profiles", result.total_profiles),
        ("Rows without data", result.rows_without_data),
        ("Interviews scheduled", result.interviews_scheduled),
        ("No-shows", result.no_show_count()),
        ("Offers released", result.total_offers),
        ("Onboarded", result.total_onboarded),
        ("Technical rejections", result.technical_rejections),
        ("HR rejections", result.hr_rejections),
        ("Unrecognized feedback", result.unrecognized_feedback),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count, Color::Reset)]);
    }
    table
}

pub fn screening_table(result: &AggregateResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Candidates")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in ScreeningStatus::ALL {
        table.add_row(vec![
            Cell::new(status.as_str()),
            count_cell(result.screening.get(status), status_color(status)),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        Cell::new(result.screening.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn stage_table(result: &AggregateResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Reached"),
        header_cell("Selected"),
        header_cell("Rejected"),
        header_cell("Dropped"),
        header_cell("Reschedule"),
        header_cell("To schedule"),
        header_cell("Feedback pending"),
        header_cell("In progress"),
        header_cell("Pending"),
    ]);
    apply_wide_table_style(&mut table);
    for index in 1..10 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stage in Stage::ALL {
        let counts = result.stage(stage);
        table.add_row(vec![
            stage_cell(stage.label()),
            Cell::new(counts.reached),
            count_cell(counts.selected, Color::Green),
            count_cell(counts.rejected, Color::Red),
            count_cell(counts.dropped, Color::Red),
            count_cell(counts.reschedule, Color::Yellow),
            count_cell(counts.to_be_scheduled, Color::Yellow),
            count_cell(counts.feedback_pending, Color::Yellow),
            count_cell(counts.in_progress, Color::Yellow),
            count_cell(result.pending.get(stage.pending()), Color::Cyan),
        ]);
    }
    let mut offer_row = vec![stage_cell("Offer")];
    offer_row.extend((0..8).map(|_| dim_cell("-")));
    offer_row.push(count_cell(result.pending.get(PendingStage::Offer), Color::Cyan));
    table.add_row(offer_row);
    table
}

pub fn bucket_table(label: &str, buckets: &BTreeMap<String, BucketStats>) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        header_cell(label),
        header_cell("Profiles"),
        header_cell("Screened"),
        header_cell("Screen select"),
    ];
    header.extend(Stage::ALL.map(|stage| header_cell(&format!("{} sel/rej/pend", stage.label()))));
    header.extend([
        header_cell("Offer pending"),
        header_cell("Offers"),
        header_cell("Onboarded"),
    ]);
    table.set_header(header);
    apply_wide_table_style(&mut table);
    for index in 1..11 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut ordered: Vec<(&String, &BucketStats)> = buckets.iter().collect();
    ordered.sort_by(|a, b| b.1.profiles.cmp(&a.1.profiles).then_with(|| a.0.cmp(b.0)));
    for (name, stats) in ordered {
        let mut row = vec![
            Cell::new(name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stats.profiles),
            Cell::new(stats.screened),
            count_cell(stats.screening.selected, Color::Green),
        ];
        row.extend(Stage::ALL.map(|stage| {
            let tally = stats.stage(stage);
            Cell::new(format!(
                "{}/{}/{}",
                tally.selected, tally.rejected, tally.pending
            ))
        }));
        row.extend([
            count_cell(stats.offer_pending, Color::Cyan),
            count_cell(stats.offers, Color::Green),
            count_cell(stats.onboarded, Color::Green),
        ]);
        table.add_row(row);
    }
    table
}

pub fn experience_table(result: &AggregateResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Experience"), header_cell("Candidates")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bracket in ExperienceBracket::ALL {
        let count = result.experience.get(&bracket).copied().unwrap_or_default();
        table.add_row(vec![Cell::new(bracket.label()), count_cell(count, Color::Reset)]);
    }
    table
}

/// Headers, table statistics and field bindings for `funnel inspect`.
pub fn inspect_tables(
    headers: &[String],
    stats: &TableStats,
    bindings: &[(SemanticField, FieldBinding)],
) -> Vec<(&'static str, Table)> {
    let mut header_table = Table::new();
    header_table.set_header(vec![header_cell("#"), header_cell("Header")]);
    apply_table_style(&mut header_table);
    align_column(&mut header_table, 0, CellAlignment::Right);
    for (index, header) in headers.iter().enumerate() {
        header_table.add_row(vec![dim_cell(index + 1), Cell::new(header)]);
    }

    let mut stats_table = Table::new();
    stats_table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut stats_table);
    align_column(&mut stats_table, 1, CellAlignment::Right);
    for entry in &stats.entries {
        stats_table.add_row(vec![Cell::new(&entry.label), Cell::new(&entry.value)]);
    }

    let mut binding_table = Table::new();
    binding_table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Header"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut binding_table);
    align_column(&mut binding_table, 3, CellAlignment::Center);
    for (field, binding) in bindings {
        let (header, status) = match binding {
            FieldBinding::Bound(header) => (
                Cell::new(header),
                Cell::new("bound").fg(Color::Green),
            ),
            FieldBinding::MissingHeader(header) => (
                Cell::new(header),
                Cell::new("missing")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
            ),
            FieldBinding::Unbound => (dim_cell("-"), dim_cell("unbound")),
        };
        binding_table.add_row(vec![
            Cell::new(field.key()),
            Cell::new(field.label()),
            header,
            status,
        ]);
    }

    vec![
        ("Headers", header_table),
        ("Statistics", stats_table),
        ("Field bindings", binding_table),
    ]
}

/// Semantic fields with labels and default headers for `funnel fields`.
pub fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Default header"),
    ]);
    apply_table_style(&mut table);
    for field in SemanticField::ALL {
        table.add_row(vec![
            Cell::new(field.key()).fg(Color::Blue),
            Cell::new(field.label()),
            Cell::new(field.default_header()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_color(status: ScreeningStatus) -> Color {
    match status {
        ScreeningStatus::Selected => Color::Green,
        ScreeningStatus::Rejected | ScreeningStatus::NoShow => Color::Red,
        ScreeningStatus::Hold | ScreeningStatus::FeedbackPending => Color::Yellow,
        ScreeningStatus::Pending => Color::Reset,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn stage_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn total_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
