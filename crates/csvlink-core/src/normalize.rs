//! Text normalization applied to key values on both sides before any
//! distance is computed.
//!
//! Rules run in a fixed order: cutoff truncation, whole-word removal,
//! character deletion, final trim. Cutoff must run first — stripping could
//! otherwise reveal or hide a cutoff marker.

use regex::Regex;

use csvlink_model::{LinkError, MatchConfig, Result};

/// Compiled normalization rules for one run. Built once from the active
/// [`MatchConfig`]; rebuild whenever the configuration changes.
pub struct Normalizer {
    cutoffs: Vec<Regex>,
    word_strips: Vec<Regex>,
    strip_chars: Vec<char>,
}

impl Normalizer {
    pub fn new(cfg: &MatchConfig) -> Result<Self> {
        let mut cutoffs = Vec::with_capacity(cfg.cutoff_words.len());
        for word in &cfg.cutoff_words {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            // Space-prefixed search: " word" matches, a bare substring
            // like "Acmefka" does not.
            cutoffs.push(compile(&format!("(?i) {}", regex::escape(word)))?);
        }
        let mut word_strips = Vec::with_capacity(cfg.strip_words.len());
        for word in &cfg.strip_words {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            word_strips.push(compile(&format!(r"(?i)\b{}\b", regex::escape(word)))?);
        }
        Ok(Self {
            cutoffs,
            word_strips,
            strip_chars: cfg.strip_chars.clone(),
        })
    }

    /// Canonical comparison form of `raw`.
    pub fn normalize(&self, raw: &str) -> String {
        let truncated = match self
            .cutoffs
            .iter()
            .filter_map(|re| re.find(raw).map(|found| found.start()))
            .min()
        {
            Some(earliest) => &raw[..earliest],
            None => raw,
        };
        let mut text = truncated.to_string();
        for re in &self.word_strips {
            text = re.replace_all(&text, "").into_owned();
        }
        if !self.strip_chars.is_empty() {
            text.retain(|ch| !self.strip_chars.contains(&ch));
        }
        text.trim().to_string()
    }

    /// Normalize every value in a column.
    pub fn normalize_all(&self, values: &[String]) -> Vec<String> {
        values.iter().map(|value| self.normalize(value)).collect()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|error| LinkError::Message(format!("bad pattern: {error}")))
}
