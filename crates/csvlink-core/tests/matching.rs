//! End-to-end matching tests: tier policy, disambiguation, and the
//! orchestrator's output contract.

use csvlink_core::orchestrator::{DISTANCE_COLUMN, LINKED_COLUMN, MATCHED_COLUMN};
use csvlink_core::{Candidate, DecisionSurface, RankOutcome, rank, run};
use csvlink_model::{CellValue, FieldSelection, LinkError, MatchConfig, Table};

/// Decision surface scripted with canned answers; records every prompt it
/// receives so tests can assert on the option lists.
#[derive(Default)]
struct Scripted {
    answers: Vec<Option<usize>>,
    calls: Vec<(String, Vec<String>)>,
}

impl Scripted {
    fn new(answers: Vec<Option<usize>>) -> Self {
        Self {
            answers,
            calls: Vec::new(),
        }
    }
}

impl DecisionSurface for Scripted {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        self.calls.push((prompt.to_string(), options.to_vec()));
        if self.answers.is_empty() {
            None
        } else {
            self.answers.remove(0)
        }
    }
}

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| (*c).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|cell| CellValue::from_raw(cell)).collect());
    }
    table
}

fn fields(linked: bool) -> FieldSelection {
    FieldSelection {
        source_key: "Name".to_string(),
        target_key: "Title".to_string(),
        target_linked: linked.then(|| "Id".to_string()),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

// =========================================================================
// Ranker policy
// =========================================================================

#[test]
fn single_exact_match_is_auto_selected() {
    let outcome = rank("Acme", &strings(&["Acme", "Acme2"]), 5, 25);
    assert_eq!(outcome, RankOutcome::Auto(Candidate { row: 0, distance: 0 }));
}

#[test]
fn duplicate_exact_matches_are_ambiguous_over_exact_tier_only() {
    let outcome = rank("Acme", &strings(&["Acme", "Acme2", "Acme"]), 5, 25);
    let RankOutcome::Ambiguous(candidates) = outcome else {
        panic!("expected ambiguous outcome");
    };
    // "Acme2" (distance 1) is excluded: the exact tier shadows the near tier.
    assert_eq!(
        candidates,
        vec![
            Candidate { row: 0, distance: 0 },
            Candidate { row: 2, distance: 0 },
        ]
    );
}

#[test]
fn single_near_match_is_auto_selected_with_its_distance() {
    let outcome = rank("Acme", &strings(&["Acme2", "Metallurgy"]), 5, 25);
    assert_eq!(outcome, RankOutcome::Auto(Candidate { row: 0, distance: 1 }));
}

#[test]
fn near_set_is_sorted_ascending_with_stable_ties() {
    let outcome = rank(
        "abcd",
        &strings(&["abcde1", "abcz", "abce", "abcdef"]),
        5,
        25,
    );
    let RankOutcome::Ambiguous(candidates) = outcome else {
        panic!("expected ambiguous outcome");
    };
    // abcde1 -> 2, abcz -> 1, abce -> 1, abcdef -> 2; ties keep row order.
    assert_eq!(
        candidates,
        vec![
            Candidate { row: 1, distance: 1 },
            Candidate { row: 2, distance: 1 },
            Candidate { row: 0, distance: 2 },
            Candidate { row: 3, distance: 2 },
        ]
    );
}

#[test]
fn near_set_is_capped() {
    let targets: Vec<String> = (0..30).map(|i| format!("acm{i:02}")).collect();
    // "acqqq" vs "acmNN": distance 3 for every target.
    let outcome = rank("acqqq", &targets, 5, 25);
    let RankOutcome::Ambiguous(candidates) = outcome else {
        panic!("expected ambiguous outcome");
    };
    assert_eq!(candidates.len(), 25);
    assert!(candidates.iter().all(|c| c.distance == 3));
    // Stable: first 25 rows in original order.
    let rows: Vec<usize> = candidates.iter().map(|c| c.row).collect();
    assert_eq!(rows, (0..25).collect::<Vec<_>>());
}

#[test]
fn nothing_within_threshold_is_no_match() {
    let outcome = rank("Acme", &strings(&["Completely different"]), 5, 25);
    assert_eq!(outcome, RankOutcome::NoMatch);
}

// =========================================================================
// Orchestrator
// =========================================================================

#[test]
fn exact_match_writes_value_distance_and_linked() {
    let source = table(&["Name"], &[&["Acme"]]);
    let target = table(&["Title", "Id"], &[&["Acme", "T-1"], &["Acme2", "T-2"]]);
    let mut surface = Scripted::new(vec![]);
    let outcome = run(
        &source,
        &target,
        &fields(true),
        &MatchConfig::default(),
        &mut surface,
    )
    .expect("run");

    assert!(surface.calls.is_empty(), "no disambiguation expected");
    assert_eq!(
        outcome.table.columns,
        vec!["Name", MATCHED_COLUMN, DISTANCE_COLUMN, LINKED_COLUMN]
    );
    assert_eq!(outcome.table.cell_text(0, 1), "Acme");
    assert_eq!(outcome.table.cell_text(0, 2), "0");
    assert_eq!(outcome.table.cell_text(0, 3), "T-1");
    assert_eq!(outcome.stats.exact_auto, 1);
}

#[test]
fn duplicate_exact_matches_prompt_and_selection_picks_linked_value() {
    let source = table(&["Name"], &[&["Acme"]]);
    let target = table(&["Title", "Id"], &[&["Acme", "T-1"], &["Acme", "T-2"]]);
    let mut surface = Scripted::new(vec![Some(1)]);
    let outcome = run(
        &source,
        &target,
        &fields(true),
        &MatchConfig::default(),
        &mut surface,
    )
    .expect("run");

    assert_eq!(surface.calls.len(), 1);
    let (_, options) = &surface.calls[0];
    assert_eq!(options.len(), 2);
    // Exact-tier ambiguity shows the full target record.
    assert_eq!(options[0], "Title=Acme, Id=T-1");
    assert_eq!(options[1], "Title=Acme, Id=T-2");
    assert_eq!(outcome.table.cell_text(0, 3), "T-2");
    assert_eq!(outcome.stats.chosen, 1);
}

#[test]
fn distant_value_yields_empty_cells_without_prompting() {
    let source = table(&["Name"], &[&["Acme"]]);
    let target = table(&["Title", "Id"], &[&["Metallurgy", "T-1"]]);
    let mut surface = Scripted::new(vec![]);
    let outcome = run(
        &source,
        &target,
        &fields(true),
        &MatchConfig::default(),
        &mut surface,
    )
    .expect("run");

    assert!(surface.calls.is_empty());
    assert_eq!(outcome.table.rows[0][1], CellValue::Empty);
    assert_eq!(outcome.table.rows[0][2], CellValue::Empty);
    assert_eq!(outcome.table.rows[0][3], CellValue::Empty);
    assert_eq!(outcome.stats.unmatched, 1);
}

#[test]
fn declined_prompt_degrades_row_and_run_continues() {
    let source = table(&["Name"], &[&["Acme"], &["Zebra Ltd"]]);
    let target = table(
        &["Title", "Id"],
        &[&["Acme", "T-1"], &["Acme", "T-2"], &["Zebra Ltd", "T-3"]],
    );
    let mut surface = Scripted::new(vec![None]);
    let outcome = run(
        &source,
        &target,
        &fields(true),
        &MatchConfig::default(),
        &mut surface,
    )
    .expect("run");

    // Row 0 declined, row 1 still processed and matched.
    assert_eq!(outcome.table.rows[0][1], CellValue::Empty);
    assert_eq!(outcome.table.cell_text(1, 1), "Zebra Ltd");
    assert_eq!(outcome.table.cell_text(1, 3), "T-3");
    assert_eq!(outcome.stats.declined, 1);
    assert_eq!(outcome.stats.exact_auto, 1);
}

#[test]
fn near_tier_prompt_shows_value_and_distance() {
    let source = table(&["Name"], &[&["Acme"]]);
    let target = table(&["Title", "Id"], &[&["Acme1", "T-1"], &["Acme22", "T-2"]]);
    let mut surface = Scripted::new(vec![Some(0)]);
    let outcome = run(
        &source,
        &target,
        &fields(true),
        &MatchConfig::default(),
        &mut surface,
    )
    .expect("run");

    let (_, options) = &surface.calls[0];
    assert_eq!(options[0], "Acme1 (distance 1)");
    assert_eq!(options[1], "Acme22 (distance 2)");
    assert_eq!(outcome.table.cell_text(0, 2), "1");
}

#[test]
fn output_preserves_source_row_order_and_cells() {
    let source = table(
        &["Name", "Note"],
        &[&["Zebra", "z"], &["Acme", "a"], &["Mid Co", "m"]],
    );
    let target = table(&["Title"], &[&["Acme"], &["Zebra"], &["Mid Co"]]);
    let mut surface = Scripted::new(vec![]);
    let outcome = run(
        &source,
        &target,
        &fields(false),
        &MatchConfig::default(),
        &mut surface,
    )
    .expect("run");

    assert_eq!(outcome.table.columns.len(), 4); // no Linked column requested
    let names: Vec<&str> = (0..3).map(|row| outcome.table.cell_text(row, 0)).collect();
    assert_eq!(names, vec!["Zebra", "Acme", "Mid Co"]);
    let notes: Vec<&str> = (0..3).map(|row| outcome.table.cell_text(row, 1)).collect();
    assert_eq!(notes, vec!["z", "a", "m"]);
}

#[test]
fn normalization_applies_to_both_sides() {
    let source = table(&["Name"], &[&["The Acme Corp. fka Old Co"]]);
    let target = table(&["Title"], &[&["acme corp"]]);
    let cfg = MatchConfig::from_lists("fka", "the", ".");
    let mut surface = Scripted::new(vec![]);
    let outcome = run(&source, &target, &fields(false), &cfg, &mut surface).expect("run");

    // "The Acme Corp. fka Old Co" -> "Acme Corp"; "acme corp" unchanged.
    // Distance 2 (case differences), within threshold, single candidate.
    assert_eq!(outcome.table.cell_text(0, 1), "acme corp");
    assert_eq!(outcome.table.cell_text(0, 2), "2");
    assert_eq!(outcome.stats.near_auto, 1);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn unknown_columns_fail_before_any_row_is_processed() {
    let source = table(&["Name"], &[&["Acme"]]);
    let target = table(&["Title"], &[&["Acme"]]);
    let bad = FieldSelection {
        source_key: "Nope".to_string(),
        target_key: "Missing".to_string(),
        target_linked: Some("AlsoMissing".to_string()),
    };
    let mut surface = Scripted::new(vec![]);
    let error = run(
        &source,
        &target,
        &bad,
        &MatchConfig::default(),
        &mut surface,
    )
    .expect_err("must fail validation");

    let LinkError::Validation(message) = error else {
        panic!("expected validation error");
    };
    assert!(message.contains("Nope"));
    assert!(message.contains("Missing"));
    assert!(message.contains("AlsoMissing"));
    assert!(surface.calls.is_empty());
}

#[test]
fn empty_key_names_fail_validation() {
    let source = table(&["Name"], &[&["Acme"]]);
    let target = table(&["Title"], &[&["Acme"]]);
    let bad = FieldSelection {
        source_key: "  ".to_string(),
        target_key: "Title".to_string(),
        target_linked: None,
    };
    let mut surface = Scripted::new(vec![]);
    let error = run(
        &source,
        &target,
        &bad,
        &MatchConfig::default(),
        &mut surface,
    )
    .expect_err("must fail validation");
    assert!(matches!(error, LinkError::Validation(_)));
}
