//! Core search types
//!
//! - SearchQuery: immutable request value passed to the engine
//! - TextPredicate: normalized query text used for matching and pre-filtering
//! - ScoreBreakdown: per-signal contributions to a total score
//! - ScoredResult: a track or a marker plus its score

use crate::records::{Marker, Track};
use crate::timestamp::Timestamp;
use crate::types::{GeoPosition, RecordKind, TrackId};
use serde::Serialize;

// ============================================================================
// TextPredicate
// ============================================================================

/// Case-folded query text
///
/// A field matches when its case-folded form contains the needle as a
/// contiguous substring. Accessors use the same predicate as a coarse
/// pre-filter, so they can never drop a record the text scorer would accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPredicate {
    needle: String,
}

impl TextPredicate {
    /// Build a predicate from raw query text
    ///
    /// Surrounding whitespace is ignored. Returns `None` when nothing is
    /// left, since an empty needle can never match.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(TextPredicate {
            needle: fold_case(trimmed),
        })
    }

    /// The case-folded needle
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether `field` contains the needle, ignoring case
    pub fn matches(&self, field: &str) -> bool {
        fold_case(field).contains(&self.needle)
    }

    /// Whether any of `fields` matches
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.matches(field))
    }

    /// Whether any text field of `track` matches
    pub fn matches_track(&self, track: &Track) -> bool {
        self.matches_any(&[&track.title, &track.description, &track.category])
    }

    /// Whether any text field of `marker` matches
    pub fn matches_marker(&self, marker: &Marker) -> bool {
        self.matches_any(&[&marker.title, &marker.description, &marker.category])
    }
}

/// Fold `text` one character at a time
///
/// `str::to_lowercase` picks final sigma from context, which would fold the
/// same letter differently in a needle and in a field.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

// ============================================================================
// SearchQuery
// ============================================================================

/// Immutable search request
///
/// # Examples
///
/// ```
/// use trailrank_core::{GeoPosition, SearchQuery, Timestamp, TrackId};
///
/// let query = SearchQuery::new("lake", Timestamp::from_secs(1_700_000_000))
///     .with_position(GeoPosition::new(47.37, 8.54))
///     .with_current_track(TrackId::new(12))
///     .with_limit(20);
///
/// assert_eq!(query.text(), "lake");
/// assert_eq!(query.limit(), Some(20));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
    position: Option<GeoPosition>,
    current_track: Option<TrackId>,
    now: Timestamp,
    limit: Option<usize>,
}

impl SearchQuery {
    /// Create a query with text and the reference instant for recency
    pub fn new(text: impl Into<String>, now: Timestamp) -> Self {
        SearchQuery {
            text: text.into(),
            position: None,
            current_track: None,
            now,
            limit: None,
        }
    }

    /// Builder: set the reference position for distance boosting
    pub fn with_position(mut self, position: GeoPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder: set the track currently in focus
    pub fn with_current_track(mut self, track_id: TrackId) -> Self {
        self.current_track = Some(track_id);
        self
    }

    /// Builder: cap the number of returned results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Raw query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Reference position, if any
    pub fn position(&self) -> Option<&GeoPosition> {
        self.position.as_ref()
    }

    /// Track currently in focus, if any
    pub fn current_track(&self) -> Option<TrackId> {
        self.current_track
    }

    /// Reference instant for recency
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Result cap, if any
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Matching predicate, or `None` if the text is blank
    pub fn predicate(&self) -> Option<TextPredicate> {
        TextPredicate::new(&self.text)
    }
}

// ============================================================================
// ScoreBreakdown
// ============================================================================

/// Contribution of each ranking signal to a result's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Weighted field matches; always positive for a returned result
    pub text: f64,
    /// Proximity to the query position
    pub distance: f64,
    /// Closeness of the record's instant to the query instant
    pub recency: f64,
    /// Current-track promotion (positive) or demotion (negative)
    pub context: f64,
}

impl ScoreBreakdown {
    /// Sum of all contributions
    pub fn total(&self) -> f64 {
        self.text + self.distance + self.recency + self.context
    }
}

// ============================================================================
// ScoredResult
// ============================================================================

/// The record carried by a result: exactly one track or one marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultPayload {
    /// A matching track
    Track(Track),
    /// A matching marker
    Marker(Marker),
}

impl ResultPayload {
    /// Which kind of record this is
    pub fn kind(&self) -> RecordKind {
        match self {
            ResultPayload::Track(_) => RecordKind::Track,
            ResultPayload::Marker(_) => RecordKind::Marker,
        }
    }

    /// Raw storage id of the record
    pub fn raw_id(&self) -> u64 {
        match self {
            ResultPayload::Track(track) => track.id.get(),
            ResultPayload::Marker(marker) => marker.id.get(),
        }
    }
}

/// A ranked search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    payload: ResultPayload,
    score: f64,
    breakdown: ScoreBreakdown,
}

impl ScoredResult {
    /// Result for a matching track
    pub fn from_track(track: Track, breakdown: ScoreBreakdown) -> Self {
        Self::new(ResultPayload::Track(track), breakdown)
    }

    /// Result for a matching marker
    pub fn from_marker(marker: Marker, breakdown: ScoreBreakdown) -> Self {
        Self::new(ResultPayload::Marker(marker), breakdown)
    }

    fn new(payload: ResultPayload, breakdown: ScoreBreakdown) -> Self {
        ScoredResult {
            payload,
            score: breakdown.total(),
            breakdown,
        }
    }

    /// Combined score; higher ranks first
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Per-signal contributions
    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    /// The track or marker
    pub fn payload(&self) -> &ResultPayload {
        &self.payload
    }

    /// Consume the result, keeping the record
    pub fn into_payload(self) -> ResultPayload {
        self.payload
    }

    /// Which kind of record this is
    pub fn kind(&self) -> RecordKind {
        self.payload.kind()
    }

    /// The track, if this is a track result
    pub fn track(&self) -> Option<&Track> {
        match &self.payload {
            ResultPayload::Track(track) => Some(track),
            ResultPayload::Marker(_) => None,
        }
    }

    /// The marker, if this is a marker result
    pub fn marker(&self) -> Option<&Marker> {
        match &self.payload {
            ResultPayload::Marker(marker) => Some(marker),
            ResultPayload::Track(_) => None,
        }
    }
}
