//! Routing data models
//!
//! Typed representations of travel modes and routed paths as produced by
//! the OpenRouteService directions API.

use std::fmt;
use std::str::FromStr;

use domain::GeoLocation;
use serde::{Deserialize, Serialize};

/// Travel mode selecting the routing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Driving
    Car,
    /// Walking
    Walk,
    /// Cycling
    Bike,
}

impl TravelMode {
    /// OpenRouteService routing profile identifier for this mode
    #[must_use]
    pub const fn profile(&self) -> &'static str {
        match self {
            Self::Car => "driving-car",
            Self::Walk => "foot-walking",
            Self::Bike => "cycling-regular",
        }
    }

    /// Human-readable label, used in the distance summary
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Walk => "Walk",
            Self::Bike => "Bike",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an unknown travel mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTravelMode(String);

impl fmt::Display for UnknownTravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown travel mode: {} (expected car, walk or bike)", self.0)
    }
}

impl std::error::Error for UnknownTravelMode {}

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "walk" => Ok(Self::Walk),
            "bike" => Ok(Self::Bike),
            other => Err(UnknownTravelMode(other.to_string())),
        }
    }
}

/// A routed path from origin to destination
///
/// Points are kept in path order as returned by the directions service,
/// already converted to (latitude, longitude).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    /// Ordered path points, origin first
    pub points: Vec<GeoLocation>,
    /// Travel mode the route was computed for
    pub mode: TravelMode,
    /// Total distance in whole kilometers, rounded half away from zero
    pub distance_km: u32,
    /// Raw distance in meters as reported by the service
    pub distance_meters: f64,
}

impl Route {
    /// Round a provider distance in meters to whole kilometers
    ///
    /// Uses `f64::round`, i.e. halves round away from zero.
    #[must_use]
    pub fn round_km(distance_meters: f64) -> u32 {
        let km = (distance_meters / 1000.0).round();
        if km <= 0.0 { 0 } else { km as u32 }
    }

    /// First point of the path, if any
    #[must_use]
    pub fn start(&self) -> Option<&GeoLocation> {
        self.points.first()
    }

    /// Last point of the path, if any
    #[must_use]
    pub fn end(&self) -> Option<&GeoLocation> {
        self.points.last()
    }

    /// Distance summary, e.g. `Distance by Car: 152km`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Distance by {}: {}km", self.mode, self.distance_km)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
