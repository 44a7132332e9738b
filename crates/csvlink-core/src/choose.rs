//! Disambiguation protocol: how ambiguous candidates are described and how
//! a single external choice is solicited.

use csvlink_model::Table;

use crate::rank::Candidate;

/// External decision-maker for ambiguous candidate lists.
///
/// `options` are rendered 1-based to the decision-maker; the returned index
/// is 0-based into `options`. `None` is an explicit decline and a valid
/// terminal outcome — there is no default or timeout selection. The call
/// blocks the per-row loop until it returns.
pub trait DecisionSurface {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// Prompt line for one ambiguous source value.
pub fn prompt_for(source_value: &str, exact: bool) -> String {
    if exact {
        format!("Multiple exact matches for \"{source_value}\" — pick one:")
    } else {
        format!("Near matches for \"{source_value}\" — pick one:")
    }
}

/// Label for an exact-tier candidate: the full target record, so a human
/// can tell identical key values apart by their other fields.
pub fn exact_option_label(target: &Table, candidate: &Candidate) -> String {
    target
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| format!("{column}={}", target.cell_text(candidate.row, idx)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Label for a near-tier candidate: the comparison value and its distance.
pub fn near_option_label(target_value: &str, candidate: &Candidate) -> String {
    format!("{target_value} (distance {})", candidate.distance)
}
