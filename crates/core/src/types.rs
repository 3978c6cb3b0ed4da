//! Identity and position types shared by tracks and markers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in metres (IUGG)
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque unique identifier of a track
///
/// Ids are assigned by the storage layer. Ordering is only used to break
/// exact score ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(u64);

impl TrackId {
    /// Wrap a raw storage id
    pub const fn new(id: u64) -> Self {
        TrackId(id)
    }

    /// Raw storage id
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track:{}", self.0)
    }
}

/// Opaque unique identifier of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(u64);

impl MarkerId {
    /// Wrap a raw storage id
    pub const fn new(id: u64) -> Self {
        MarkerId(id)
    }

    /// Raw storage id
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker:{}", self.0)
    }
}

// ============================================================================
// RecordKind
// ============================================================================

/// The two record kinds the engine ranks
///
/// The declaration order is the tie-break order: tracks sort before markers
/// when totals are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A recorded track
    Track,
    /// A point annotation attached to a track
    Marker,
}

impl RecordKind {
    /// Both kinds, in tie-break order
    pub const fn all() -> [RecordKind; 2] {
        [RecordKind::Track, RecordKind::Marker]
    }

    /// Lowercase name for logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Track => "track",
            RecordKind::Marker => "marker",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// GeoPosition
// ============================================================================

/// A WGS84 latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPosition {
    /// Create a position from degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoPosition {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite and within their ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in metres (haversine)
    ///
    /// Returns NaN if either position has non-finite coordinates.
    pub fn distance_to(&self, other: &GeoPosition) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();
        EARTH_RADIUS_METERS * c
    }

    /// This position shifted by the given degree offsets
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> GeoPosition {
        GeoPosition::new(self.latitude + d_lat, self.longitude + d_lon)
    }
}
