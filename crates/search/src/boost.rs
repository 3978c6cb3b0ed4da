//! Score boosters
//!
//! Boosters add a bounded contribution on top of the text score:
//! - DistanceBooster: nearer markers score higher
//! - RecencyBooster: more recent records score higher
//! - ContextBooster: current-track demotion and marker promotion
//!
//! Boosters never decide whether a record matches. The ranker drops text
//! non-matches before boosts are added.

use crate::config::{ContextConfig, DistanceConfig, RecencyConfig};
use crate::scorer::SearchDoc;
use trailrank_core::{GeoPosition, RecordKind, SearchQuery, Timestamp, TrackId};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// A single ranking signal applied after text scoring
pub trait Booster: Send + Sync {
    /// Contribution of this signal for `doc` under `query`
    fn boost(&self, doc: &SearchDoc<'_>, query: &SearchQuery) -> f64;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// DistanceBooster
// ============================================================================

/// Proximity boost: `max_boost / (1 + meters / scale_meters)`
#[derive(Debug, Clone, Default)]
pub struct DistanceBooster {
    config: DistanceConfig,
}

impl DistanceBooster {
    /// Create a booster with the given shape
    pub fn new(config: DistanceConfig) -> Self {
        DistanceBooster { config }
    }

    /// Boost for a record at `record` seen from `reference`
    ///
    /// Zero when either position is missing or out of range, or the
    /// distance is not finite.
    pub fn score(&self, reference: Option<&GeoPosition>, record: Option<&GeoPosition>) -> f64 {
        let (Some(reference), Some(record)) = (reference, record) else {
            return 0.0;
        };
        if !reference.is_valid() || !record.is_valid() {
            return 0.0;
        }
        let meters = reference.distance_to(record);
        if !meters.is_finite() {
            return 0.0;
        }
        self.config.max_boost / (1.0 + meters / self.config.scale_meters)
    }
}

impl Booster for DistanceBooster {
    fn boost(&self, doc: &SearchDoc<'_>, query: &SearchQuery) -> f64 {
        self.score(query.position(), doc.position.as_ref())
    }

    fn name(&self) -> &str {
        "distance"
    }
}

// ============================================================================
// RecencyBooster
// ============================================================================

/// Recency boost: `max_boost / (1 + hours_elapsed / scale_hours)`
///
/// Instants in the future relative to `now` count as zero elapsed time.
#[derive(Debug, Clone, Default)]
pub struct RecencyBooster {
    config: RecencyConfig,
}

impl RecencyBooster {
    /// Create a booster with the given shape
    pub fn new(config: RecencyConfig) -> Self {
        RecencyBooster { config }
    }

    /// Boost for an event at `instant` seen from `now`
    ///
    /// Zero for unrecorded instants and for anything at or before the
    /// configured oldest allowed instant.
    pub fn score(&self, now: Timestamp, instant: Option<Timestamp>) -> f64 {
        let Some(instant) = instant else {
            return 0.0;
        };
        if instant <= self.config.oldest_allowed {
            return 0.0;
        }
        let elapsed_hours =
            now.as_micros().saturating_sub(instant.as_micros()) as f64 / MICROS_PER_HOUR;
        self.config.max_boost / (1.0 + elapsed_hours / self.config.scale_hours)
    }
}

impl Booster for RecencyBooster {
    fn boost(&self, doc: &SearchDoc<'_>, query: &SearchQuery) -> f64 {
        self.score(query.now(), doc.instant)
    }

    fn name(&self) -> &str {
        "recency"
    }
}

// ============================================================================
// ContextBooster
// ============================================================================

/// Current-track adjustment
///
/// The current track itself is demoted: the caller is already looking at it.
/// Markers on the current track are promoted.
#[derive(Debug, Clone, Default)]
pub struct ContextBooster {
    config: ContextConfig,
}

impl ContextBooster {
    /// Create a booster with the given magnitudes
    pub fn new(config: ContextConfig) -> Self {
        ContextBooster { config }
    }

    /// Signed adjustment for a record of `kind` tied to `record_track`
    pub fn score(
        &self,
        current: Option<TrackId>,
        kind: RecordKind,
        record_track: Option<TrackId>,
    ) -> f64 {
        match (current, record_track) {
            (Some(current), Some(track)) if current == track => match kind {
                RecordKind::Track => -self.config.current_track_demotion,
                RecordKind::Marker => self.config.current_track_marker_promotion,
            },
            _ => 0.0,
        }
    }
}

impl Booster for ContextBooster {
    fn boost(&self, doc: &SearchDoc<'_>, query: &SearchQuery) -> f64 {
        self.score(query.current_track(), doc.kind, doc.track_id)
    }

    fn name(&self) -> &str {
        "context"
    }
}
