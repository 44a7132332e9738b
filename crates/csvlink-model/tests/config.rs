//! Configuration parsing from the plain strings the CLI hands over.

use csvlink_model::{MatchConfig, split_list};

#[test]
fn split_list_trims_and_drops_empty_entries() {
    assert_eq!(split_list(" fka , dba ,,"), vec!["fka", "dba"]);
    assert!(split_list("").is_empty());
    assert!(split_list(" , ").is_empty());
}

#[test]
fn from_lists_parses_words_and_characters() {
    let cfg = MatchConfig::from_lists("fka, dba", "inc, the", ".,&");
    assert_eq!(cfg.cutoff_words, vec!["fka", "dba"]);
    assert_eq!(cfg.strip_words, vec!["inc", "the"]);
    assert_eq!(cfg.strip_chars, vec!['.', ',', '&']);
}

#[test]
fn defaults_match_design_constants() {
    let cfg = MatchConfig::default();
    assert_eq!(cfg.near_threshold, 5);
    assert_eq!(cfg.prompt_cap, 25);
}
