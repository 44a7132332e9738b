use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use csvlink_core::RunStats;

pub fn print_summary(stats: &RunStats, output: &std::path::Path) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Outcome"), header_cell("Rows")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Exact (auto)"), Cell::new(stats.exact_auto)]);
    table.add_row(vec![Cell::new("Near (auto)"), Cell::new(stats.near_auto)]);
    table.add_row(vec![Cell::new("Chosen"), Cell::new(stats.chosen)]);
    table.add_row(vec![Cell::new("Declined"), Cell::new(stats.declined)]);
    table.add_row(vec![Cell::new("No match"), Cell::new(stats.unmatched)]);
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(stats.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Output: {}", output.display());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
