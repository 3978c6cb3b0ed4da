//! Search orchestrator
//!
//! This module provides:
//! - SearchEngine: fetches candidates, scores them, fuses the two kinds
//!
//! # Flow
//!
//! ```text
//! SearchQuery
//!      │
//!      ▼
//! ┌──────────────────────────────────────────┐
//! │               SearchEngine                │
//! │   ┌──────────────┐   ┌──────────────┐    │
//! │   │ fetch tracks │   │fetch markers │    │
//! │   └──────┬───────┘   └──────┬───────┘    │
//! │   ┌──────┴───────┐   ┌──────┴───────┐    │
//! │   │ score tracks │   │score markers │    │
//! │   └──────┬───────┘   └──────┬───────┘    │
//! │          └────────┬─────────┘            │
//! │              ┌────┴────┐                 │
//! │              │  Fuser  │                 │
//! │              └────┬────┘                 │
//! └───────────────────┼──────────────────────┘
//!                     ▼
//!            Vec<ScoredResult>
//! ```
//!
//! The two passes run as independent rayon tasks joined before fusion.
//! SearchEngine is stateless: it holds only shared, immutable references.

use crate::boost::{Booster, ContextBooster, DistanceBooster, RecencyBooster};
use crate::config::ScoringConfig;
use crate::fuser::{Fuser, SimpleFuser};
use crate::scorer::{Scorer, SearchDoc, TextScorer};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};
use trailrank_core::{
    Error, RecordAccessor, RecordKind, Result, ScoreBreakdown, ScoredResult, SearchQuery,
    TextPredicate,
};

// ============================================================================
// SearchEngine
// ============================================================================

/// Relevance ranking over tracks and markers
///
/// Cheap to clone and safe to share; concurrent searches do not interfere.
#[derive(Clone)]
pub struct SearchEngine {
    accessor: Arc<dyn RecordAccessor>,
    config: Arc<ScoringConfig>,
    scorer: Arc<dyn Scorer>,
    distance: DistanceBooster,
    recency: RecencyBooster,
    context: ContextBooster,
    fuser: Arc<dyn Fuser>,
}

impl SearchEngine {
    /// Create an engine with the default scoring config
    pub fn new(accessor: Arc<dyn RecordAccessor>) -> Self {
        Self::build(accessor, ScoringConfig::default())
    }

    /// Create an engine with a custom scoring config
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the config fails validation.
    pub fn with_config(accessor: Arc<dyn RecordAccessor>, config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(accessor, config))
    }

    fn build(accessor: Arc<dyn RecordAccessor>, config: ScoringConfig) -> Self {
        SearchEngine {
            accessor,
            scorer: Arc::new(TextScorer::new(config.weights)),
            distance: DistanceBooster::new(config.distance),
            recency: RecencyBooster::new(config.recency),
            context: ContextBooster::new(config.context),
            fuser: Arc::new(SimpleFuser),
            config: Arc::new(config),
        }
    }

    /// Builder: set custom text scorer
    ///
    /// The scorer must keep the zero-means-no-match contract.
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: set custom fuser
    pub fn with_fuser(mut self, fuser: Arc<dyn Fuser>) -> Self {
        self.fuser = fuser;
        self
    }

    /// The scoring config in use
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    // ========================================================================
    // Search Orchestration
    // ========================================================================

    /// Rank every matching track and marker for `query`
    ///
    /// # Flow
    ///
    /// 1. Normalize the query text; blank text matches nothing
    /// 2. Fetch and score tracks and markers in parallel
    /// 3. Drop candidates with a zero text score
    /// 4. Fuse into one list ordered by score (ties: tracks first, then id)
    /// 5. Apply the query limit, else the configured `max_results`
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if either fetch fails. No partial
    /// results are returned.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ScoredResult>> {
        let start = Instant::now();

        let Some(predicate) = query.predicate() else {
            debug!("Blank query text, nothing to match");
            return Ok(Vec::new());
        };

        let (tracks, markers) = rayon::join(
            || self.score_tracks(query, &predicate),
            || self.score_markers(query, &predicate),
        );
        let tracks = tracks?;
        let markers = markers?;
        let (track_hits, marker_hits) = (tracks.len(), markers.len());

        let limit = query.limit().or(self.config.max_results);
        let fused = self.fuser.fuse(
            vec![(RecordKind::Track, tracks), (RecordKind::Marker, markers)],
            limit,
        );

        debug!(
            needle = predicate.needle(),
            track_hits,
            marker_hits,
            returned = fused.results.len(),
            truncated = fused.truncated,
            scorer = self.scorer.name(),
            fuser = self.fuser.name(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "Search complete"
        );

        Ok(fused.results)
    }

    // ========================================================================
    // Per-Kind Passes
    // ========================================================================

    fn score_tracks(
        &self,
        query: &SearchQuery,
        predicate: &TextPredicate,
    ) -> Result<Vec<ScoredResult>> {
        let tracks = self
            .accessor
            .fetch_matching_tracks(predicate)
            .map_err(|e| fetch_failed(RecordKind::Track, e))?;
        let candidates = tracks.len();

        let scored: Vec<ScoredResult> = tracks
            .into_par_iter()
            .filter_map(|track| {
                let breakdown = self.score_doc(&SearchDoc::from_track(&track), query, predicate)?;
                Some(ScoredResult::from_track(track, breakdown))
            })
            .collect();

        trace!(candidates, matched = scored.len(), "Scored tracks");
        Ok(scored)
    }

    fn score_markers(
        &self,
        query: &SearchQuery,
        predicate: &TextPredicate,
    ) -> Result<Vec<ScoredResult>> {
        let markers = self
            .accessor
            .fetch_matching_markers(predicate)
            .map_err(|e| fetch_failed(RecordKind::Marker, e))?;
        let candidates = markers.len();

        let scored: Vec<ScoredResult> = markers
            .into_par_iter()
            .filter_map(|marker| {
                let breakdown =
                    self.score_doc(&SearchDoc::from_marker(&marker), query, predicate)?;
                Some(ScoredResult::from_marker(marker, breakdown))
            })
            .collect();

        trace!(candidates, matched = scored.len(), "Scored markers");
        Ok(scored)
    }

    /// Score one document, or `None` if its text does not match
    ///
    /// Boosts are only computed for text matches; they can never rescue a
    /// non-match.
    pub fn score_doc(
        &self,
        doc: &SearchDoc<'_>,
        query: &SearchQuery,
        predicate: &TextPredicate,
    ) -> Option<ScoreBreakdown> {
        let text = self.scorer.score(doc, predicate);
        if text.is_nan() || text <= 0.0 {
            return None;
        }

        Some(ScoreBreakdown {
            text,
            distance: self.distance.boost(doc, query),
            recency: self.recency.boost(doc, query),
            context: self.context.boost(doc, query),
        })
    }
}

fn fetch_failed(kind: RecordKind, source: Error) -> Error {
    warn!(%kind, error = %source, "Candidate fetch failed");
    Error::fetch_failed(kind, source)
}

// ============================================================================
// Tests
// ============================================================================
