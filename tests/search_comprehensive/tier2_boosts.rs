//! Tier 2: Boosts
//!
//! Distance and recency must order otherwise-equal records.

use crate::test_utils::*;
use trailrank::{
    GeoPosition, ScoringConfig, SearchEngine, Timestamp, Track, TrackId, TrackStatistics,
};

/// Nearer markers rank first
#[test]
fn test_tier2_marker_distance_order() {
    let mut f = Fixture::new();
    let track = f.track("", "", "");
    let far_far_away = f.marker_at("aa", "", "", 0.3, None, track);
    let near = f.marker_at("ab", "", "", 0.1, None, track);
    let far = f.marker_at("ac", "", "", 0.2, None, track);

    let results = f.engine().search(&query("a").with_position(HERE)).unwrap();
    assert_markers(&results, &[near, far, far_far_away]);
}

/// Without a reference position distance plays no part
#[test]
fn test_tier2_distance_neutral_without_position() {
    let mut f = Fixture::new();
    let track = f.track("", "", "");
    f.marker_at("aa", "", "", 0.3, None, track);
    f.marker_at("ab", "", "", 0.1, None, track);

    let results = f.engine().search(&query("a")).unwrap();
    assert!(results.iter().all(|r| r.breakdown().distance == 0.0));
}

/// Tracks never receive a distance contribution
#[test]
fn test_tier2_tracks_have_no_distance_boost() {
    let mut f = Fixture::new();
    f.track("aa", "", "");

    let results = f.engine().search(&query("a").with_position(HERE)).unwrap();
    assert_eq!(results[0].breakdown().distance, 0.0);
}

/// Tracks active more recently rank first
#[test]
fn test_tier2_track_recency_order() {
    let mut f = Fixture::new();
    let oldest = f.track_at("aa", "", "", Some(3));
    let recent = f.track_at("ab", "", "", Some(1));
    let old = f.track_at("ac", "", "", Some(2));

    let results = f.engine().search(&query("a")).unwrap();
    assert_tracks(&results, &[recent, old, oldest]);
}

/// Markers recorded more recently rank first
#[test]
fn test_tier2_marker_recency_order() {
    let mut f = Fixture::new();
    let track = f.track("", "", "");
    let oldest = f.marker_at("aa", "", "", 0.0, Some(2), track);
    let recent = f.marker_at("ab", "", "", 0.0, Some(0), track);
    let old = f.marker_at("ac", "", "", 0.0, Some(1), track);

    let results = f.engine().search(&query("a")).unwrap();
    assert_markers(&results, &[recent, old, oldest]);
}

/// Track recency follows the midpoint, not the stop time
#[test]
fn test_tier2_track_recency_uses_midpoint() {
    let hour = 3_600u64;
    let now = NOW.as_micros() / 1_000_000;
    // Long track: ran 10h..0h ago, midpoint 5h ago
    let long = Track::new(TrackId::new(1), "aa").with_statistics(TrackStatistics::recorded(
        Timestamp::from_secs(now - 10 * hour),
        Timestamp::from_secs(now),
    ));
    // Short track: ran 3h..2h ago, midpoint 2.5h ago
    let short = Track::new(TrackId::new(2), "ab").with_statistics(TrackStatistics::recorded(
        Timestamp::from_secs(now - 3 * hour),
        Timestamp::from_secs(now - 2 * hour),
    ));

    let f = Fixture::new();
    f.records.insert_track(long).unwrap();
    f.records.insert_track(short).unwrap();

    let results = f.engine().search(&query("a")).unwrap();
    assert_tracks(&results, &[TrackId::new(2), TrackId::new(1)]);
}

/// Unrecorded instants are neutral, neither oldest nor newest
#[test]
fn test_tier2_unrecorded_is_neutral() {
    let mut f = Fixture::new();
    let never = f.track("aa", "", "");
    let recorded = f.track_at("ab", "", "", Some(100_000));

    let results = f.engine().search(&query("a")).unwrap();
    assert_eq!(results[0].track().unwrap().id, recorded);
    assert_eq!(results[1].track().unwrap().id, never);
    assert_eq!(results[1].breakdown().recency, 0.0);
    assert!(results[0].breakdown().recency > 0.0);
}

/// Instants at or before the oldest allowed bound get no recency boost
#[test]
fn test_tier2_oldest_allowed_bound() {
    let config = ScoringConfig::default();
    let bound = config.recency.oldest_allowed;

    let f = Fixture::new();
    f.records
        .insert_track(
            Track::new(TrackId::new(1), "aa")
                .with_statistics(TrackStatistics::recorded(bound, bound)),
        )
        .unwrap();
    f.records
        .insert_track(Track::new(TrackId::new(2), "ab").with_statistics(
            TrackStatistics::recorded(Timestamp::from_secs(1_000), Timestamp::from_secs(2_000)),
        ))
        .unwrap();

    let engine = SearchEngine::with_config(f.records.clone(), config).unwrap();
    let results = engine.search(&query("a")).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.breakdown().recency == 0.0));
}

/// The reference position is honoured wherever it is
#[test]
fn test_tier2_distance_relative_to_query_position() {
    let mut f = Fixture::new();
    let track = f.track("", "", "");
    let near_here = f.marker_at("aa", "", "", 0.01, None, track);
    let near_there = f.marker_at("ab", "", "", 1.0, None, track);

    let there = GeoPosition::new(HERE.latitude + 1.0, HERE.longitude + 1.0);
    let results = f.engine().search(&query("a").with_position(there)).unwrap();
    assert_markers(&results, &[near_there, near_here]);
}
