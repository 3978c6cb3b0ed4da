//! Track and marker records
//!
//! These are read-only snapshots handed to the engine by a
//! [`RecordAccessor`](crate::traits::RecordAccessor). The engine never mutates them.

use crate::timestamp::Timestamp;
use crate::types::{GeoPosition, MarkerId, TrackId};
use serde::{Deserialize, Serialize};

// ============================================================================
// TrackStatistics
// ============================================================================

/// Aggregate timing statistics of a track
///
/// Both instants are `None` until the track is first started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackStatistics {
    /// When recording started
    pub start_time: Option<Timestamp>,
    /// When recording stopped
    pub stop_time: Option<Timestamp>,
}

impl TrackStatistics {
    /// Statistics of a track that was never started
    pub const fn not_recorded() -> Self {
        TrackStatistics {
            start_time: None,
            stop_time: None,
        }
    }

    /// Statistics of a finished recording
    pub const fn recorded(start: Timestamp, stop: Timestamp) -> Self {
        TrackStatistics {
            start_time: Some(start),
            stop_time: Some(stop),
        }
    }

    /// Statistics of a recording still in progress
    pub const fn started(start: Timestamp) -> Self {
        TrackStatistics {
            start_time: Some(start),
            stop_time: None,
        }
    }

    /// The instant the track was "active": midpoint of start and stop
    ///
    /// A track still recording is active at its start instant. A stop time
    /// without a start time is inconsistent and counts as not recorded.
    pub fn active_instant(&self) -> Option<Timestamp> {
        match (self.start_time, self.stop_time) {
            (Some(start), Some(stop)) => Some(start.midpoint(stop)),
            (Some(start), None) => Some(start),
            (None, _) => None,
        }
    }
}

// ============================================================================
// Track
// ============================================================================

/// A recorded session with descriptive text and timing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Storage identity
    pub id: TrackId,
    /// Track name
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Free-text category (activity type)
    pub category: String,
    /// Start/stop statistics
    pub statistics: TrackStatistics,
}

impl Track {
    /// Create a track with a title and no other data
    pub fn new(id: TrackId, title: impl Into<String>) -> Self {
        Track {
            id,
            title: title.into(),
            description: String::new(),
            category: String::new(),
            statistics: TrackStatistics::not_recorded(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set statistics
    pub fn with_statistics(mut self, statistics: TrackStatistics) -> Self {
        self.statistics = statistics;
        self
    }
}

// ============================================================================
// Marker
// ============================================================================

/// A point annotation belonging to a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Storage identity
    pub id: MarkerId,
    /// Owning track; `None` only for inconsistent data
    pub track_id: Option<TrackId>,
    /// Marker name
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Free-text category
    pub category: String,
    /// Where the marker was placed
    pub position: GeoPosition,
    /// When the marker was placed
    pub recorded_at: Option<Timestamp>,
}

impl Marker {
    /// Create a marker owned by `track_id`
    pub fn new(
        id: MarkerId,
        track_id: TrackId,
        title: impl Into<String>,
        position: GeoPosition,
    ) -> Self {
        Marker {
            id,
            track_id: Some(track_id),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            position,
            recorded_at: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set recorded instant
    pub fn with_recorded_at(mut self, recorded_at: Timestamp) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Builder: detach from any track
    pub fn without_track(mut self) -> Self {
        self.track_id = None;
        self
    }
}
