//! Scoring configuration via `trailrank.toml`
//!
//! Every weight and threshold the scorers use lives here so hosts can tune
//! ranking without code changes. A config is only usable after
//! [`ScoringConfig::validate`] accepts it; the engine refuses invalid ones.

use serde::{Deserialize, Serialize};
use std::path::Path;
use trailrank_core::{Error, Result, Timestamp};

/// Config file name hosts conventionally use
pub const CONFIG_FILE_NAME: &str = "trailrank.toml";

/// 2000-01-01T00:00:00Z. Instants at or before this get no recency boost.
pub const OLDEST_ALLOWED_TIMESTAMP: Timestamp = Timestamp::from_secs(946_684_800);

// ============================================================================
// Sections
// ============================================================================

/// Per-field text match weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    /// Weight of a title match
    pub title: f64,
    /// Weight of a description match
    pub description: f64,
    /// Weight of a category match
    pub category: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: 4.0,
            description: 2.0,
            category: 1.0,
        }
    }
}

impl FieldWeights {
    /// Smallest difference between two distinct non-empty field combinations
    ///
    /// Any boost span at or above this could reorder records with different
    /// text matches.
    pub fn min_combination_gap(&self) -> f64 {
        let mut sums: Vec<f64> = (1u8..8)
            .map(|mask| {
                let mut sum = 0.0;
                if mask & 0b100 != 0 {
                    sum += self.title;
                }
                if mask & 0b010 != 0 {
                    sum += self.description;
                }
                if mask & 0b001 != 0 {
                    sum += self.category;
                }
                sum
            })
            .collect();
        sums.sort_by(f64::total_cmp);
        sums.windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold(f64::INFINITY, f64::min)
    }
}

/// Distance boost shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Boost at zero distance
    pub max_boost: f64,
    /// Distance in metres at which the boost halves
    pub scale_meters: f64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        DistanceConfig {
            max_boost: 0.25,
            scale_meters: 1_000.0,
        }
    }
}

/// Recency boost shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecencyConfig {
    /// Boost at zero elapsed time
    pub max_boost: f64,
    /// Elapsed hours at which the boost halves
    pub scale_hours: f64,
    /// Instants at or before this bound are treated as not recorded
    #[serde(rename = "oldest_allowed_micros")]
    pub oldest_allowed: Timestamp,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        RecencyConfig {
            max_boost: 0.25,
            scale_hours: 24.0,
            oldest_allowed: OLDEST_ALLOWED_TIMESTAMP,
        }
    }
}

/// Current-track promotion and demotion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Subtracted from the current track itself
    pub current_track_demotion: f64,
    /// Added to markers of the current track
    pub current_track_marker_promotion: f64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig {
            current_track_demotion: 0.2,
            current_track_marker_promotion: 0.2,
        }
    }
}

// ============================================================================
// ScoringConfig
// ============================================================================

/// Ranking configuration loaded from `trailrank.toml`.
///
/// # Example
///
/// ```toml
/// max_results = 100
///
/// [weights]
/// title = 4.0
/// description = 2.0
/// category = 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Default result cap when the query sets none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    /// Text match weights
    pub weights: FieldWeights,
    /// Distance boost
    pub distance: DistanceConfig,
    /// Recency boost
    pub recency: RecencyConfig,
    /// Current-track adjustment
    pub context: ContextConfig,
}

impl ScoringConfig {
    /// Largest amount boosts can move one record relative to another
    pub fn boost_span(&self) -> f64 {
        self.distance.max_boost
            + self.recency.max_boost
            + self.context.current_track_demotion
            + self.context.current_track_marker_promotion
    }

    /// Check ranges and the ordering guarantees the ranker relies on
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if:
    /// - any weight, boost or scale is negative or not finite
    /// - a scale is zero
    /// - weights are not geometrically separated
    ///   (`title > description + category`, `description > category > 0`)
    /// - the boost span could overturn a text-match difference
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("weights.title", self.weights.title),
            ("weights.description", self.weights.description),
            ("weights.category", self.weights.category),
            ("distance.max_boost", self.distance.max_boost),
            ("recency.max_boost", self.recency.max_boost),
            (
                "context.current_track_demotion",
                self.context.current_track_demotion,
            ),
            (
                "context.current_track_marker_promotion",
                self.context.current_track_marker_promotion,
            ),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("distance.scale_meters", self.distance.scale_meters),
            ("recency.scale_hours", self.recency.scale_hours),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_config(format!(
                    "{} must be a finite positive number, got {}",
                    name, value
                )));
            }
        }

        let w = &self.weights;
        if w.category <= 0.0 {
            return Err(Error::invalid_config("weights.category must be positive"));
        }
        if w.description <= w.category {
            return Err(Error::invalid_config(format!(
                "weights.description ({}) must exceed weights.category ({})",
                w.description, w.category
            )));
        }
        if w.title <= w.description + w.category {
            return Err(Error::invalid_config(format!(
                "weights.title ({}) must exceed description + category ({})",
                w.title,
                w.description + w.category
            )));
        }

        let gap = w.min_combination_gap();
        let span = self.boost_span();
        if span >= gap {
            return Err(Error::invalid_config(format!(
                "combined boosts ({}) must stay below the smallest text weight gap ({})",
                span, gap
            )));
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScoringConfig =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigIo {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded scoring config");
        Ok(config)
    }

    /// Serialize to TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# trailrank scoring configuration
#
# Text match weights. Must satisfy title > description + category and
# description > category > 0, so a single better field always wins.
[weights]
title = 4.0
description = 2.0
category = 1.0

# Markers only: boost = max_boost / (1 + meters / scale_meters)
[distance]
max_boost = 0.25
scale_meters = 1000.0

# boost = max_boost / (1 + hours / scale_hours)
# Instants at or before oldest_allowed_micros (2000-01-01) get no boost.
[recency]
max_boost = 0.25
scale_hours = 24.0
oldest_allowed_micros = 946684800000000

# All boosts together must stay below the smallest text weight gap.
[context]
current_track_demotion = 0.2
current_track_marker_promotion = 0.2

# Default result cap when a query sets none.
# max_results = 100
"#
    }
}
