//! Edit-distance primitive.

/// Levenshtein distance (unit-cost insert/delete/substitute) between two
/// normalized strings. Kept behind this single seam so the metric can be
/// swapped without touching the ranker.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}
