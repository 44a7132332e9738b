//! Per-row matching loop.
//!
//! Strictly sequential: a row's decision is finalized before the next row
//! starts, because the decision surface may block on a human. The source
//! table is never mutated; the output is a fresh table with three derived
//! columns appended to each source row.

use csvlink_model::{CellValue, FieldSelection, LinkError, MatchConfig, Result, Table};
use tracing::{debug, info};

use crate::choose::{DecisionSurface, exact_option_label, near_option_label, prompt_for};
use crate::normalize::Normalizer;
use crate::rank::{Candidate, RankOutcome, rank};

pub const MATCHED_COLUMN: &str = "Matched";
pub const DISTANCE_COLUMN: &str = "Distance";
pub const LINKED_COLUMN: &str = "Linked";

/// Per-outcome row counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rows: usize,
    pub exact_auto: usize,
    pub near_auto: usize,
    pub chosen: usize,
    pub declined: usize,
    pub unmatched: usize,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub table: Table,
    pub stats: RunStats,
}

/// Match every source row against the target table.
///
/// Field presence is validated before any row is processed; a violation
/// aborts the whole run with [`LinkError::Validation`] and produces no
/// output. A declined prompt only degrades that one row to no-match.
pub fn run(
    source: &Table,
    target: &Table,
    fields: &FieldSelection,
    cfg: &MatchConfig,
    surface: &mut dyn DecisionSurface,
) -> Result<RunOutcome> {
    let columns = validate_fields(source, target, fields)?;
    let normalizer = Normalizer::new(cfg)?;

    // Normalize each key column once, not per row pair.
    let source_raw = source.column_values(columns.source_key);
    let source_norms = normalizer.normalize_all(&source_raw);
    let target_raw = target.column_values(columns.target_key);
    let target_norms = normalizer.normalize_all(&target_raw);

    info!(
        source_rows = source.rows.len(),
        target_rows = target.rows.len(),
        near_threshold = cfg.near_threshold,
        "matching started"
    );

    let mut out_columns = source.columns.clone();
    out_columns.push(MATCHED_COLUMN.to_string());
    out_columns.push(DISTANCE_COLUMN.to_string());
    if columns.target_linked.is_some() {
        out_columns.push(LINKED_COLUMN.to_string());
    }
    let mut output = Table::new(out_columns);
    let mut stats = RunStats {
        rows: source.rows.len(),
        ..RunStats::default()
    };

    for (row, source_norm) in source_norms.iter().enumerate() {
        let decision = match rank(source_norm, &target_norms, cfg.near_threshold, cfg.prompt_cap)
        {
            RankOutcome::Auto(candidate) => {
                if candidate.distance == 0 {
                    stats.exact_auto += 1;
                } else {
                    stats.near_auto += 1;
                }
                Some(candidate)
            }
            RankOutcome::Ambiguous(candidates) => {
                let picked = disambiguate(
                    target,
                    &target_raw,
                    &source_raw[row],
                    &candidates,
                    surface,
                );
                match picked {
                    Some(candidate) => {
                        stats.chosen += 1;
                        Some(candidate)
                    }
                    None => {
                        debug!(row, value = %source_raw[row], "selection declined");
                        stats.declined += 1;
                        None
                    }
                }
            }
            RankOutcome::NoMatch => {
                debug!(row, value = %source_raw[row], "no match within threshold");
                stats.unmatched += 1;
                None
            }
        };

        let mut out_row = source.rows[row].clone();
        match &decision {
            Some(candidate) => {
                out_row.push(CellValue::from_raw(&target_raw[candidate.row]));
                out_row.push(CellValue::Text(candidate.distance.to_string()));
                if let Some(linked) = columns.target_linked {
                    out_row.push(CellValue::from_raw(target.cell_text(candidate.row, linked)));
                }
            }
            None => {
                out_row.push(CellValue::Empty);
                out_row.push(CellValue::Empty);
                if columns.target_linked.is_some() {
                    out_row.push(CellValue::Empty);
                }
            }
        }
        output.push_row(out_row);
    }

    info!(
        exact = stats.exact_auto,
        near = stats.near_auto,
        chosen = stats.chosen,
        declined = stats.declined,
        unmatched = stats.unmatched,
        "matching finished"
    );
    Ok(RunOutcome {
        table: output,
        stats,
    })
}

fn disambiguate(
    target: &Table,
    target_raw: &[String],
    source_value: &str,
    candidates: &[Candidate],
    surface: &mut dyn DecisionSurface,
) -> Option<Candidate> {
    let exact = candidates.first().is_some_and(|c| c.distance == 0);
    let options: Vec<String> = candidates
        .iter()
        .map(|candidate| {
            if exact {
                exact_option_label(target, candidate)
            } else {
                near_option_label(&target_raw[candidate.row], candidate)
            }
        })
        .collect();
    let prompt = prompt_for(source_value, exact);
    surface
        .choose(&prompt, &options)
        .and_then(|index| candidates.get(index).cloned())
}

struct ResolvedColumns {
    source_key: usize,
    target_key: usize,
    target_linked: Option<usize>,
}

fn validate_fields(
    source: &Table,
    target: &Table,
    fields: &FieldSelection,
) -> Result<ResolvedColumns> {
    if fields.source_key.trim().is_empty() || fields.target_key.trim().is_empty() {
        return Err(LinkError::Validation(
            "source and target key column names are required".to_string(),
        ));
    }

    let source_key = source.column_index(&fields.source_key);
    let target_key = target.column_index(&fields.target_key);
    let mut target_linked = None;

    let mut problems = Vec::new();
    if source_key.is_none() {
        problems.push(format!("source table has no column \"{}\"", fields.source_key));
    }
    if target_key.is_none() {
        problems.push(format!("target table has no column \"{}\"", fields.target_key));
    }
    if let Some(name) = &fields.target_linked {
        target_linked = target.column_index(name);
        if target_linked.is_none() {
            problems.push(format!("target table has no column \"{name}\""));
        }
    }
    match (source_key, target_key) {
        (Some(source_key), Some(target_key)) if problems.is_empty() => Ok(ResolvedColumns {
            source_key,
            target_key,
            target_linked,
        }),
        _ => Err(LinkError::Validation(problems.join("; "))),
    }
}
