//! In-memory record accessor
//!
//! A snapshot store for embedding hosts and tests. Enforces the
//! marker-to-track relationship on insert, which the engine itself relies on
//! but never checks.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use trailrank_core::{
    Error, Marker, MarkerId, RecordAccessor, Result, TextPredicate, Track, TrackId,
};

#[derive(Debug, Default)]
struct Snapshot {
    tracks: BTreeMap<TrackId, Track>,
    markers: BTreeMap<MarkerId, Marker>,
}

/// Thread-safe in-memory track and marker store
///
/// Fetches filter with the same predicate the text scorer uses and return
/// clones in id order.
#[derive(Debug, Default)]
pub struct InMemoryRecords {
    inner: RwLock<Snapshot>,
}

impl InMemoryRecords {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records
    ///
    /// # Errors
    ///
    /// Fails on duplicate ids or markers referencing missing tracks.
    pub fn from_records(
        tracks: impl IntoIterator<Item = Track>,
        markers: impl IntoIterator<Item = Marker>,
    ) -> Result<Self> {
        let store = Self::new();
        for track in tracks {
            store.insert_track(track)?;
        }
        for marker in markers {
            store.insert_marker(marker)?;
        }
        Ok(store)
    }

    /// Insert a track
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTrack`] if the id is taken.
    pub fn insert_track(&self, track: Track) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.tracks.contains_key(&track.id) {
            return Err(Error::DuplicateTrack(track.id));
        }
        inner.tracks.insert(track.id, track);
        Ok(())
    }

    /// Insert a marker
    ///
    /// Markers without an owning track are accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMarker`] if the id is taken, or
    /// [`Error::UnknownTrack`] if the owning track does not exist.
    pub fn insert_marker(&self, marker: Marker) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.markers.contains_key(&marker.id) {
            return Err(Error::DuplicateMarker(marker.id));
        }
        if let Some(track_id) = marker.track_id {
            if !inner.tracks.contains_key(&track_id) {
                return Err(Error::UnknownTrack(track_id));
            }
        }
        inner.markers.insert(marker.id, marker);
        Ok(())
    }

    /// Remove a track together with its markers
    pub fn remove_track(&self, id: TrackId) -> Option<Track> {
        let mut inner = self.inner.write();
        let track = inner.tracks.remove(&id)?;
        inner.markers.retain(|_, marker| marker.track_id != Some(id));
        Some(track)
    }

    /// Number of stored tracks
    pub fn track_count(&self) -> usize {
        self.inner.read().tracks.len()
    }

    /// Number of stored markers
    pub fn marker_count(&self) -> usize {
        self.inner.read().markers.len()
    }
}

impl RecordAccessor for InMemoryRecords {
    fn fetch_matching_tracks(&self, predicate: &TextPredicate) -> Result<Vec<Track>> {
        Ok(self
            .inner
            .read()
            .tracks
            .values()
            .filter(|track| predicate.matches_track(track))
            .cloned()
            .collect())
    }

    fn fetch_matching_markers(&self, predicate: &TextPredicate) -> Result<Vec<Marker>> {
        Ok(self
            .inner
            .read()
            .markers
            .values()
            .filter(|marker| predicate.matches_marker(marker))
            .cloned()
            .collect())
    }
}
