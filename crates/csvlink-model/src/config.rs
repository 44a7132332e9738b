use serde::{Deserialize, Serialize};

/// Highest edit distance still considered a near match.
pub const DEFAULT_NEAR_THRESHOLD: usize = 5;

/// Most candidates ever offered in one disambiguation prompt.
pub const DEFAULT_PROMPT_CAP: usize = 25;

/// Normalization and tiering parameters, immutable for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Words that truncate the text at their first space-prefixed
    /// occurrence. Everything from the match onward is discarded.
    pub cutoff_words: Vec<String>,
    /// Words removed wherever they occur as whole words.
    pub strip_words: Vec<String>,
    /// Characters deleted literally, anywhere in the text.
    pub strip_chars: Vec<char>,
    pub near_threshold: usize,
    pub prompt_cap: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cutoff_words: Vec::new(),
            strip_words: Vec::new(),
            strip_chars: Vec::new(),
            near_threshold: DEFAULT_NEAR_THRESHOLD,
            prompt_cap: DEFAULT_PROMPT_CAP,
        }
    }
}

impl MatchConfig {
    /// Build from the plain strings the configuration source supplies.
    /// Word lists are comma-split and trimmed; the character list is a bare
    /// sequence where every non-whitespace character counts, commas included.
    pub fn from_lists(cutoff_words: &str, strip_words: &str, strip_chars: &str) -> Self {
        Self {
            cutoff_words: split_list(cutoff_words),
            strip_words: split_list(strip_words),
            strip_chars: strip_chars
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect(),
            ..Self::default()
        }
    }
}

/// Comma-split and trim, dropping empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Which columns drive a run: the key column on each side plus an optional
/// target column whose value is carried into the output alongside the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSelection {
    pub source_key: String,
    pub target_key: String,
    pub target_linked: Option<String>,
}
