//! Fusion of per-kind result lists
//!
//! This module provides:
//! - Fuser trait for pluggable merge strategies
//! - SimpleFuser: concatenate, sort by score, truncate (the default)
//! - rank_order: the total order results are returned in

use std::cmp::Ordering;
use trailrank_core::{RecordKind, ScoredResult};

// ============================================================================
// FusedResult
// ============================================================================

/// Result of fusing track and marker results
#[derive(Debug, Clone, Default)]
pub struct FusedResult {
    /// Final ranked list
    pub results: Vec<ScoredResult>,
    /// Whether results were dropped by the limit
    pub truncated: bool,
}

impl FusedResult {
    /// Create a new FusedResult
    pub fn new(results: Vec<ScoredResult>, truncated: bool) -> Self {
        FusedResult { results, truncated }
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Ranking order: score descending, then tracks before markers, then id ascending
///
/// The secondary keys only matter for exactly equal scores and make the
/// output independent of fetch order.
pub fn rank_order(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| a.kind().cmp(&b.kind()))
        .then_with(|| a.payload().raw_id().cmp(&b.payload().raw_id()))
}

// ============================================================================
// Fuser Trait
// ============================================================================

/// Pluggable fusion interface
///
/// Fusers combine the scored tracks and scored markers into one ranked list.
///
/// # Thread Safety
///
/// Fusers must be Send + Sync so the engine can be shared across threads.
pub trait Fuser: Send + Sync {
    /// Merge per-kind results and keep at most `limit` of them
    fn fuse(
        &self,
        results: Vec<(RecordKind, Vec<ScoredResult>)>,
        limit: Option<usize>,
    ) -> FusedResult;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// SimpleFuser
// ============================================================================

/// Simple fusion: concatenate and sort by [`rank_order`]
///
/// Scores from both kinds are on the same scale, so no normalization or
/// per-kind weighting is applied.
#[derive(Debug, Clone, Default)]
pub struct SimpleFuser;

impl SimpleFuser {
    /// Create a new SimpleFuser
    pub fn new() -> Self {
        SimpleFuser
    }
}

impl Fuser for SimpleFuser {
    fn fuse(
        &self,
        results: Vec<(RecordKind, Vec<ScoredResult>)>,
        limit: Option<usize>,
    ) -> FusedResult {
        let mut all: Vec<ScoredResult> = results
            .into_iter()
            .flat_map(|(_, results)| results)
            .collect();

        all.sort_by(rank_order);

        let truncated = match limit {
            Some(limit) if all.len() > limit => {
                all.truncate(limit);
                true
            }
            _ => false,
        };

        FusedResult::new(all, truncated)
    }

    fn name(&self) -> &str {
        "simple"
    }
}
