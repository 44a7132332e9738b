//! Candidate scoring and tiering for one source value.

use crate::distance::distance;

/// A target row paired with its distance from the source value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub distance: usize,
}

/// What the tier policy decided for one source value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// A single acceptable candidate; select it without asking.
    Auto(Candidate),
    /// More than one acceptable candidate; a human must pick one.
    /// For an ambiguous exact tier every candidate has distance 0; for the
    /// near tier the list is sorted by ascending distance (stable for ties)
    /// and capped.
    Ambiguous(Vec<Candidate>),
    /// Nothing within the near threshold.
    NoMatch,
}

/// Score `source_norm` against every target value and apply the tier
/// policy:
///
/// 1. one exact (distance 0) candidate → auto-select;
/// 2. several exact candidates → disambiguate over the exact tier;
/// 3. no exact, one near (distance ≤ `threshold`) → auto-select;
/// 4. no exact, several near → disambiguate over the sorted, capped near
///    tier;
/// 5. both tiers empty → no match.
pub fn rank(source_norm: &str, target_norms: &[String], threshold: usize, cap: usize) -> RankOutcome {
    let mut exact = Vec::new();
    let mut near = Vec::new();
    for (row, norm) in target_norms.iter().enumerate() {
        let d = distance(source_norm, norm);
        if d == 0 {
            exact.push(Candidate { row, distance: 0 });
        } else if d <= threshold {
            near.push(Candidate { row, distance: d });
        }
    }
    if exact.len() == 1 {
        return RankOutcome::Auto(exact.remove(0));
    }
    if exact.len() > 1 {
        return RankOutcome::Ambiguous(exact);
    }
    match near.len() {
        0 => RankOutcome::NoMatch,
        1 => RankOutcome::Auto(near.remove(0)),
        _ => {
            // Stable: equal distances keep original target order.
            near.sort_by_key(|candidate| candidate.distance);
            near.truncate(cap);
            RankOutcome::Ambiguous(near)
        }
    }
}
