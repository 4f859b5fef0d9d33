//! Cities and great-circle distance.
//!
//! The GA core treats distance as an external pure function: symmetric,
//! non-negative, zero for identical coordinates. This module provides the
//! spherical-law-of-cosines implementation over a fixed-radius Earth.

use serde::{Deserialize, Serialize};

/// Radians per degree.
const RADS_PER_DEG: f64 = std::f64::consts::PI / 180.0;

/// Earth radius in miles.
const EARTH_RADIUS_MI: f64 = 3959.0;

/// A named geographic coordinate. Immutable after construction;
/// identity is compared by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    name: String,
    lat: f64,
    lon: f64,
}

impl City {
    /// Create a new city at (lat, lon) in decimal degrees.
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// The city's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

/// Great-circle distance between two cities in miles.
///
/// Spherical law of cosines over a fixed-radius Earth. The cosine sum is
/// clamped to [-1, 1] before `acos`: floating-point rounding can push it
/// a hair above 1 for identical coordinates, and `acos(1.0)` must give
/// exactly 0, not NaN.
#[must_use]
pub fn great_circle(a: &City, b: &City) -> f64 {
    let p0 = a.lat * RADS_PER_DEG;
    let p1 = b.lat * RADS_PER_DEG;
    let dlon = (b.lon - a.lon) * RADS_PER_DEG;
    let cos_angle = p0.sin() * p1.sin() + p0.cos() * p1.cos() * dlon.cos();
    EARTH_RADIUS_MI * cos_angle.clamp(-1.0, 1.0).acos()
}
