//! Core coordinate value types

use serde::{Deserialize, Serialize};

/// A WGS84 geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// WGS84 longitude
    #[serde(alias = "lon")]
    pub longitude: f64,
    /// WGS84 latitude
    #[serde(alias = "lat")]
    pub latitude: f64,
}

impl GeoPoint {
    /// Creates a point from longitude/latitude in degrees
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Returns `(longitude, latitude)`
    pub fn to_tuple(self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// True when both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

/// Metric offsets from a reference origin, east (`x`) and north (`y`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance to the frame origin in metres
    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<(f64, f64)> for PlanarPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
