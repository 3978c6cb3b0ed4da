//! Relevance ranking for tracks and markers
//!
//! This crate provides:
//! - ScoringConfig: weights and thresholds, loadable from `trailrank.toml`
//! - Scorer trait and TextScorer (weighted field substring matching)
//! - Booster trait with DistanceBooster, RecencyBooster, ContextBooster
//! - Fuser trait and SimpleFuser for merging tracks and markers
//! - SearchEngine orchestrating a search end to end
//! - InMemoryRecords, a ready-made RecordAccessor
//! - SearchEngineExt extension trait for `accessor.search_engine()`
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use trailrank_core::{SearchQuery, Timestamp, Track, TrackId};
//! use trailrank_search::{InMemoryRecords, SearchEngineExt};
//!
//! let records = Arc::new(InMemoryRecords::new());
//! records.insert_track(Track::new(TrackId::new(1), "Lake loop")).unwrap();
//!
//! let results = records
//!     .search_engine()
//!     .search(&SearchQuery::new("lake", Timestamp::now()))
//!     .unwrap();
//! assert_eq!(results.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boost;
pub mod config;
pub mod engine;
pub mod fuser;
pub mod memory;
pub mod scorer;

use std::sync::Arc;
use trailrank_core::RecordAccessor;

// Re-export commonly used types
pub use boost::{Booster, ContextBooster, DistanceBooster, RecencyBooster};
pub use config::{
    ContextConfig, DistanceConfig, FieldWeights, RecencyConfig, ScoringConfig, CONFIG_FILE_NAME,
    OLDEST_ALLOWED_TIMESTAMP,
};
pub use engine::SearchEngine;
pub use fuser::{rank_order, FusedResult, Fuser, SimpleFuser};
pub use memory::InMemoryRecords;
pub use scorer::{Scorer, SearchDoc, TextScorer};

// ============================================================================
// Accessor Extension
// ============================================================================

/// Extension trait giving any shared accessor a default-configured engine
pub trait SearchEngineExt {
    /// Engine over this accessor with the default scoring config
    fn search_engine(&self) -> SearchEngine;
}

impl<A: RecordAccessor + 'static> SearchEngineExt for Arc<A> {
    fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(self.clone())
    }
}
