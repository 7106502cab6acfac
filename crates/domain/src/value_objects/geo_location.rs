//! Geographic location value object
//!
//! Wayfinder stores every coordinate in (latitude, longitude) order. Remote
//! geocoding and directions services return GeoJSON-style (longitude,
//! latitude) pairs; [`GeoLocation::from_lon_lat`] is the single place where
//! that order is flipped, so no call site does the swap by hand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location in WGS84 degrees, latitude first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for coordinates outside the WGS84 range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location from a provider-order (longitude, latitude) pair
    ///
    /// GeoJSON feature geometries list longitude first. This is the only
    /// boundary where the axis order is swapped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if the pair is outside the WGS84 range.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self, InvalidCoordinates> {
        Self::new(latitude, longitude)
    }

    /// Create a location without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both axes of `other` lie within `epsilon` degrees of this
    /// location
    ///
    /// Used to compare a routed path's endpoints against the geocoded origin
    /// and destination, which routing providers snap to the road network.
    #[must_use]
    pub fn within_degrees(&self, other: &Self, epsilon: f64) -> bool {
        (self.latitude - other.latitude).abs() <= epsilon
            && (self.longitude - other.longitude).abs() <= epsilon
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(43.64877, -79.38171).expect("valid coordinates");
        assert!((loc.latitude() - 43.64877).abs() < f64::EPSILON);
        assert!((loc.longitude() - -79.38171).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(90.5, 0.0).is_err());
        assert!(GeoLocation::new(-90.5, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 180.5).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_from_lon_lat_flips_order() {
        // Provider order for Toronto, ON
        let loc = GeoLocation::from_lon_lat(-79.38171, 43.64877).expect("valid");
        assert!((loc.latitude() - 43.64877).abs() < f64::EPSILON);
        assert!((loc.longitude() - -79.38171).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_lon_lat_rejects_out_of_range() {
        assert!(GeoLocation::from_lon_lat(0.0, 95.0).is_err());
        assert!(GeoLocation::from_lon_lat(-190.0, 0.0).is_err());
    }

    #[test]
    fn test_within_degrees() {
        let a = GeoLocation::new_unchecked(43.64877, -79.38171);
        let b = GeoLocation::new_unchecked(43.65, -79.39);
        assert!(a.within_degrees(&b, 0.01));
        assert!(!a.within_degrees(&b, 0.001));
        assert!(a.within_degrees(&a, 0.0));
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(43.64877, -79.38171).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("43.64877"));
        assert!(display.contains("-79.38171"));
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(45.42178, -75.69119).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("45.42178"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
