//! Tier 4: Context
//!
//! The current track is demoted; its markers are promoted.

use crate::test_utils::*;
use trailrank::{Marker, MarkerId};

/// The current track ranks below an otherwise equal track
#[test]
fn test_tier4_current_track_demoted() {
    let mut f = Fixture::new();
    let current = f.track_at("ab", "", "", Some(1));
    let other = f.track_at("aa", "", "", Some(1));

    let results = f
        .engine()
        .search(&query("a").with_current_track(current))
        .unwrap();
    assert_tracks(&results, &[other, current]);
    assert!(results[1].breakdown().context < 0.0);
}

/// Markers of the current track rank above otherwise equal markers
#[test]
fn test_tier4_current_track_marker_promoted() {
    let mut f = Fixture::new();
    let track1 = f.track("", "", "");
    let track2 = f.track("", "", "");
    let other = f.marker_at("aa", "", "", 0.0, Some(1), track2);
    let current = f.marker_at("ab", "", "", 0.0, Some(1), track1);

    let results = f
        .engine()
        .search(&query("a").with_current_track(track1))
        .unwrap();
    assert_markers(&results, &[current, other]);
    assert!(results[0].breakdown().context > 0.0);
}

/// Context beats a small recency difference
#[test]
fn test_tier4_context_flips_recency_order() {
    let mut f = Fixture::new();
    let current = f.track_at("aa", "", "", Some(1));
    let older = f.track_at("ab", "", "", Some(2));

    let plain = f.engine().search(&query("a")).unwrap();
    assert_tracks(&plain, &[current, older]);

    let focused = f
        .engine()
        .search(&query("a").with_current_track(current))
        .unwrap();
    assert_tracks(&focused, &[older, current]);
}

/// Context never overturns a text-match difference
#[test]
fn test_tier4_context_cannot_beat_title_match() {
    let mut f = Fixture::new();
    let current = f.track("", "", "");
    let other = f.track("", "", "");
    let promoted = f.marker_at("", "aa", "aa", 0.0, Some(0), current);
    let title = f.marker_at("aa", "", "", 0.5, Some(10_000), other);

    let results = f
        .engine()
        .search(&query("a").with_position(HERE).with_current_track(current))
        .unwrap();
    assert_markers(&results, &[title, promoted]);
}

/// The current track still beats a non-title match elsewhere
#[test]
fn test_tier4_demotion_cannot_sink_title_match() {
    let mut f = Fixture::new();
    let current = f.track("aa", "", "");
    let other = f.track_at("", "aa", "aa", Some(0));

    let results = f
        .engine()
        .search(&query("a").with_current_track(current))
        .unwrap();
    assert_tracks(&results, &[current, other]);
}

/// A marker without an owning track is neutral, not an error
#[test]
fn test_tier4_orphan_marker_neutral() {
    let mut f = Fixture::new();
    let current = f.track("", "", "");
    f.records
        .insert_marker(
            Marker::new(MarkerId::new(100), current, "aa", HERE).without_track(),
        )
        .unwrap();

    let results = f
        .engine()
        .search(&query("a").with_current_track(current))
        .unwrap();
    assert_markers(&results, &[MarkerId::new(100)]);
    assert_eq!(results[0].breakdown().context, 0.0);
}
