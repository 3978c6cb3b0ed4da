//! Record accessor abstraction
//!
//! The engine does not own any storage. Candidates come from a
//! [`RecordAccessor`], which a host implements over its database, content
//! provider, or an in-memory snapshot.

use std::sync::Arc;

use crate::error::Result;
use crate::records::{Marker, Track};
use crate::search_types::TextPredicate;

/// Read-only source of candidate records
///
/// Thread safety: both fetches may run concurrently from different threads
/// (requires Send + Sync).
///
/// # Contract
///
/// - The returned candidates may include records that do not match, but must
///   include every record with at least one title, description or category
///   field accepted by [`TextPredicate::matches`].
/// - Records may be returned in any order.
/// - Every marker's owning track must exist.
/// - Fetching must not have side effects visible to the engine.
pub trait RecordAccessor: Send + Sync {
    /// Fetch tracks whose text fields may match `predicate`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage is unavailable.
    fn fetch_matching_tracks(&self, predicate: &TextPredicate) -> Result<Vec<Track>>;

    /// Fetch markers whose text fields may match `predicate`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage is unavailable.
    fn fetch_matching_markers(&self, predicate: &TextPredicate) -> Result<Vec<Marker>>;
}

impl<A: RecordAccessor + ?Sized> RecordAccessor for Arc<A> {
    fn fetch_matching_tracks(&self, predicate: &TextPredicate) -> Result<Vec<Track>> {
        (**self).fetch_matching_tracks(predicate)
    }

    fn fetch_matching_markers(&self, predicate: &TextPredicate) -> Result<Vec<Marker>> {
        (**self).fetch_matching_markers(predicate)
    }
}

impl<A: RecordAccessor + ?Sized> RecordAccessor for &A {
    fn fetch_matching_tracks(&self, predicate: &TextPredicate) -> Result<Vec<Track>> {
        (**self).fetch_matching_tracks(predicate)
    }

    fn fetch_matching_markers(&self, predicate: &TextPredicate) -> Result<Vec<Marker>> {
        (**self).fetch_matching_markers(predicate)
    }
}
