//! trailrank - contextual relevance ranking for tracks and markers
//!
//! Given free-text query plus optional context (where the user is, which
//! track is in focus, what time it is), trailrank scores recorded tracks and
//! the markers placed on them and returns one list ordered by relevance.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use trailrank::{GeoPosition, InMemoryRecords, Marker, MarkerId, SearchEngine,
//!                 SearchQuery, Timestamp, Track, TrackId};
//!
//! let records = Arc::new(InMemoryRecords::new());
//! records.insert_track(Track::new(TrackId::new(1), "Alpine loop"))?;
//! records.insert_marker(Marker::new(
//!     MarkerId::new(1),
//!     TrackId::new(1),
//!     "Alpine hut",
//!     GeoPosition::new(46.55, 7.98),
//! ))?;
//!
//! let engine = SearchEngine::new(records);
//! let results = engine.search(&SearchQuery::new("alpine", Timestamp::now()))?;
//! assert_eq!(results.len(), 2);
//! # Ok::<(), trailrank::Error>(())
//! ```
//!
//! # Architecture
//!
//! Storage is not part of trailrank. Hosts implement [`RecordAccessor`] over
//! their own database (or use [`InMemoryRecords`]) and hand it to
//! [`SearchEngine`].

pub use trailrank_core::*;
pub use trailrank_search::*;
