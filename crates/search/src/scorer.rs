//! Text scoring
//!
//! This module provides:
//! - SearchDoc: ephemeral scoring view over a track or a marker
//! - Scorer trait for pluggable text scoring
//! - TextScorer: weighted per-field substring matching

use crate::config::FieldWeights;
use trailrank_core::{GeoPosition, Marker, RecordKind, TextPredicate, Timestamp, Track, TrackId};

// ============================================================================
// SearchDoc
// ============================================================================

/// Scoring view of a record
///
/// Created per candidate during a search and dropped afterwards. Gives the
/// scorer and boosters one shape for both record kinds.
#[derive(Debug, Clone, Copy)]
pub struct SearchDoc<'a> {
    /// Record kind
    pub kind: RecordKind,
    /// Title field
    pub title: &'a str,
    /// Description field
    pub description: &'a str,
    /// Category field
    pub category: &'a str,
    /// Position used for distance; tracks have none
    pub position: Option<GeoPosition>,
    /// Instant used for recency
    pub instant: Option<Timestamp>,
    /// The track itself for a track, the owning track for a marker
    pub track_id: Option<TrackId>,
}

impl<'a> SearchDoc<'a> {
    /// View of a track; its governing instant is the middle of its recording
    pub fn from_track(track: &'a Track) -> Self {
        SearchDoc {
            kind: RecordKind::Track,
            title: &track.title,
            description: &track.description,
            category: &track.category,
            position: None,
            instant: track.statistics.active_instant(),
            track_id: Some(track.id),
        }
    }

    /// View of a marker; only its own fields count, never its track's
    pub fn from_marker(marker: &'a Marker) -> Self {
        SearchDoc {
            kind: RecordKind::Marker,
            title: &marker.title,
            description: &marker.description,
            category: &marker.category,
            position: Some(marker.position),
            instant: marker.recorded_at,
            track_id: marker.track_id,
        }
    }
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable text scoring interface
///
/// A score of exactly zero means "no match" and removes the record from the
/// results, whatever its boosts would have been.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync; candidates are scored in parallel.
pub trait Scorer: Send + Sync {
    /// Score a document's text against the query predicate
    fn score(&self, doc: &SearchDoc<'_>, predicate: &TextPredicate) -> f64;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// TextScorer
// ============================================================================

/// Weighted field-match scorer
///
/// Each field containing the query (case-insensitively) adds its weight:
///
/// score = title_weight·[title matches] + description_weight·[description matches]
///       + category_weight·[category matches]
///
/// With validated weights any title match outranks any description/category
/// combination, and a description match outranks a category match.
#[derive(Debug, Clone, Default)]
pub struct TextScorer {
    weights: FieldWeights,
}

impl TextScorer {
    /// Create a scorer with the given weights
    pub fn new(weights: FieldWeights) -> Self {
        TextScorer { weights }
    }

    /// The weights in use
    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Score three raw fields against a predicate
    pub fn score_fields(
        &self,
        title: &str,
        description: &str,
        category: &str,
        predicate: &TextPredicate,
    ) -> f64 {
        [
            (title, self.weights.title),
            (description, self.weights.description),
            (category, self.weights.category),
        ]
        .into_iter()
        .filter(|(field, _)| predicate.matches(field))
        .map(|(_, weight)| weight)
        .sum()
    }
}

impl Scorer for TextScorer {
    fn score(&self, doc: &SearchDoc<'_>, predicate: &TextPredicate) -> f64 {
        self.score_fields(doc.title, doc.description, doc.category, predicate)
    }

    fn name(&self) -> &str {
        "field-match"
    }
}
