//! Tier 3: Fusion
//!
//! Tracks and markers share one ranking.

use crate::test_utils::*;
use trailrank::RecordKind;

/// Mixed kinds: title track, title marker, description marker
#[test]
fn test_tier3_mixed_text() {
    let mut f = Fixture::new();
    let track = f.track("aa", "bb", "cc");
    let description_marker = f.marker("bb", "aa", "cc", track);
    f.marker("bb", "cc", "dd", track);
    let title_marker = f.marker("aa", "bb", "cc", track);
    f.track("bb", "cc", "dd");

    let results = f.engine().search(&query("a")).unwrap();

    assert_eq!(
        ranked(&results),
        vec![
            (RecordKind::Track, track.get()),
            (RecordKind::Marker, title_marker.get()),
            (RecordKind::Marker, description_marker.get()),
        ]
    );
}

/// Results interleave by score regardless of kind
#[test]
fn test_tier3_cross_type_interleaving() {
    let mut f = Fixture::new();
    let title_track = f.track("aa", "", "");
    let category_track = f.track("", "", "aa");
    let all_marker = f.marker("aa", "aa", "aa", title_track);
    let description_marker = f.marker("", "aa", "", title_track);

    let results = f.engine().search(&query("a")).unwrap();

    assert_eq!(
        ranked(&results),
        vec![
            (RecordKind::Marker, all_marker.get()),
            (RecordKind::Track, title_track.get()),
            (RecordKind::Marker, description_marker.get()),
            (RecordKind::Track, category_track.get()),
        ]
    );
    assert!(results
        .windows(2)
        .all(|pair| pair[0].score() >= pair[1].score()));
}

/// Exact ties fall back to tracks first, then ascending id
#[test]
fn test_tier3_tie_break() {
    let mut f = Fixture::new();
    let t1 = f.track("aa", "", "");
    let t2 = f.track("ab", "", "");
    let m1 = f.marker("ac", "", "", t1);
    let m2 = f.marker("ad", "", "", t2);

    let results = f.engine().search(&query("a")).unwrap();
    assert!(results.iter().all(|r| r.score() == results[0].score()));
    assert_eq!(
        ranked(&results),
        vec![
            (RecordKind::Track, t1.get()),
            (RecordKind::Track, t2.get()),
            (RecordKind::Marker, m1.get()),
            (RecordKind::Marker, m2.get()),
        ]
    );
}

/// A query limit keeps the best results only
#[test]
fn test_tier3_limit_keeps_top() {
    let mut f = Fixture::new();
    let track = f.track("", "", "aa");
    let best = f.marker("aa", "aa", "aa", track);
    let second = f.marker("aa", "", "", track);
    f.marker("", "aa", "", track);

    let results = f.engine().search(&query("a").with_limit(2)).unwrap();
    assert_markers(&results, &[best, second]);
}

/// Score always equals the sum of its breakdown
#[test]
fn test_tier3_score_matches_breakdown() {
    let mut f = Fixture::new();
    let track = f.track_at("aa", "ba", "", Some(3));
    f.marker_at("aa", "", "ca", 0.05, Some(2), track);

    let q = query("a").with_position(HERE).with_current_track(track);
    for result in f.engine().search(&q).unwrap() {
        assert!((result.score() - result.breakdown().total()).abs() < 1e-12);
    }
}
