//! Error types for trailrank
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::{MarkerId, RecordKind, TrackId};
use std::io;
use thiserror::Error;

/// Result type alias for trailrank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the ranking engine and its record accessors
#[derive(Debug, Error)]
pub enum Error {
    /// A record accessor could not supply candidates of one kind.
    ///
    /// The whole search fails; no partial results are returned.
    #[error("Failed to fetch {kind} candidates: {source}")]
    FetchFailed {
        /// Which record kind was being fetched
        kind: RecordKind,
        /// Underlying accessor error
        #[source]
        source: Box<Error>,
    },

    /// Storage layer error reported by an accessor implementation
    #[error("Storage error: {0}")]
    Storage(String),

    /// A marker referenced a track that does not exist
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    /// A track id was inserted twice
    #[error("Duplicate track: {0}")]
    DuplicateTrack(TrackId),

    /// A marker id was inserted twice
    #[error("Duplicate marker: {0}")]
    DuplicateMarker(MarkerId),

    /// Scoring configuration violates an ordering or range constraint
    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    ConfigIo {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config file could not be parsed
    #[error("Failed to parse scoring config: {0}")]
    ConfigParse(String),
}

impl Error {
    /// Wrap an accessor error with the record kind being fetched
    pub fn fetch_failed(kind: RecordKind, source: Error) -> Self {
        Error::FetchFailed {
            kind,
            source: Box::new(source),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Whether this error originated in a record accessor
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::FetchFailed { .. })
    }
}
