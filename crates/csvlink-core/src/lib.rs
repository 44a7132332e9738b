//! `csvlink-core` — normalization, ranking, and disambiguation engine.
//!
//! Pure engine crate: receives pre-loaded tables and a decision surface,
//! returns the augmented source table. No CLI or file I/O dependencies.

pub mod choose;
pub mod distance;
pub mod normalize;
pub mod orchestrator;
pub mod rank;

pub use choose::DecisionSurface;
pub use distance::distance;
pub use normalize::Normalizer;
pub use orchestrator::{RunOutcome, RunStats, run};
pub use rank::{Candidate, RankOutcome, rank};
