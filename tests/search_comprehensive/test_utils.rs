//! Test utilities for the comprehensive search suite

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use trailrank::{
    GeoPosition, InMemoryRecords, Marker, MarkerId, RecordKind, ScoredResult, SearchEngine,
    SearchQuery, Timestamp, Track, TrackId, TrackStatistics,
};

/// Reference "now" for every scenario
pub const NOW: Timestamp = Timestamp::from_secs(1_700_000_000);

/// Reference position for every scenario
pub const HERE: GeoPosition = GeoPosition::new(37.422, -122.084);

const HOUR: Duration = Duration::from_secs(3600);

/// Install a test-writer tracing subscriber once per process
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Builds a record store with sequential ids
pub struct Fixture {
    pub records: Arc<InMemoryRecords>,
    next_track: u64,
    next_marker: u64,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        Fixture {
            records: Arc::new(InMemoryRecords::new()),
            next_track: 1,
            next_marker: 1,
        }
    }

    pub fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.records.clone())
    }

    /// Insert a track; with `hours_ago` set it was recorded from
    /// `2 * hours_ago` until now, so it was active `hours_ago` hours ago.
    pub fn track_at(
        &mut self,
        title: &str,
        description: &str,
        category: &str,
        hours_ago: Option<u32>,
    ) -> TrackId {
        let id = TrackId::new(self.next_track);
        self.next_track += 1;

        let mut track = Track::new(id, title)
            .with_description(description)
            .with_category(category);
        if let Some(hours) = hours_ago {
            track = track.with_statistics(TrackStatistics::recorded(
                NOW.saturating_sub(HOUR * hours * 2),
                NOW,
            ));
        }
        self.records.insert_track(track).unwrap();
        id
    }

    pub fn track(&mut self, title: &str, description: &str, category: &str) -> TrackId {
        self.track_at(title, description, category, None)
    }

    /// Insert a marker `offset` degrees north-east of HERE
    pub fn marker_at(
        &mut self,
        title: &str,
        description: &str,
        category: &str,
        offset: f64,
        hours_ago: Option<u32>,
        track: TrackId,
    ) -> MarkerId {
        let id = MarkerId::new(self.next_marker);
        self.next_marker += 1;

        let mut marker = Marker::new(id, track, title, HERE.offset(offset, offset))
            .with_description(description)
            .with_category(category);
        if let Some(hours) = hours_ago {
            marker = marker.with_recorded_at(NOW.saturating_sub(HOUR * hours));
        }
        self.records.insert_marker(marker).unwrap();
        id
    }

    pub fn marker(
        &mut self,
        title: &str,
        description: &str,
        category: &str,
        track: TrackId,
    ) -> MarkerId {
        self.marker_at(title, description, category, 0.0, None, track)
    }
}

/// Query with only text and NOW
pub fn query(text: &str) -> SearchQuery {
    SearchQuery::new(text, NOW)
}

/// (kind, raw id) of each result, in order
pub fn ranked(results: &[ScoredResult]) -> Vec<(RecordKind, u64)> {
    results
        .iter()
        .map(|r| (r.kind(), r.payload().raw_id()))
        .collect()
}

/// Assert every result is a track and the ids match in order
pub fn assert_tracks(results: &[ScoredResult], expected: &[TrackId]) {
    let actual: Vec<TrackId> = results
        .iter()
        .map(|r| r.track().expect("expected a track result").id)
        .collect();
    assert_eq!(actual, expected, "results: {:?}", ranked(results));
}

/// Assert every result is a marker and the ids match in order
pub fn assert_markers(results: &[ScoredResult], expected: &[MarkerId]) {
    let actual: Vec<MarkerId> = results
        .iter()
        .map(|r| r.marker().expect("expected a marker result").id)
        .collect();
    assert_eq!(actual, expected, "results: {:?}", ranked(results));
}
