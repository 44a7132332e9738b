//! CSV reading and writing for linkage tables.
//!
//! Column order and row order are preserved exactly; cell text keeps its
//! raw form apart from BOM/whitespace trimming on load.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use csvlink_model::{CellValue, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Read a CSV file into a [`Table`]. The first row is the header; short
/// records are padded with empty cells so every row aligns with the header.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = Vec::with_capacity(table.columns.len());
        for idx in 0..table.columns.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(CellValue::from_raw(normalize_cell(value)));
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "loaded csv table"
    );
    Ok(table)
}

/// Write a [`Table`] back to CSV. Empty cells render as empty strings.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        let cells: Vec<&str> = (0..table.columns.len())
            .map(|idx| row.get(idx).map(CellValue::as_text).unwrap_or(""))
            .collect();
        writer
            .write_record(&cells)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(path = %path.display(), rows = table.rows.len(), "wrote csv table");
    Ok(())
}
