//! Core types and traits for trailrank
//!
//! This crate defines the foundational types used by the ranking engine:
//! - TrackId / MarkerId: opaque record identities
//! - Timestamp: microsecond instants
//! - GeoPosition: latitude/longitude with great-circle distance
//! - Track / TrackStatistics / Marker: read-only record snapshots
//! - SearchQuery / TextPredicate: the request side
//! - ScoredResult / ResultPayload / ScoreBreakdown: the response side
//! - RecordAccessor: the storage collaborator the engine fetches from
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod records;
pub mod search_types;
pub mod timestamp;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use records::{Marker, Track, TrackStatistics};
pub use search_types::{ResultPayload, ScoreBreakdown, ScoredResult, SearchQuery, TextPredicate};
pub use timestamp::Timestamp;
pub use traits::RecordAccessor;
pub use types::{GeoPosition, MarkerId, RecordKind, TrackId, EARTH_RADIUS_METERS};
