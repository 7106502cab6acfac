//! OpenRouteService resolver client
//!
//! Turns free-text place names into coordinates via the ORS geocode search
//! endpoint and resolved origin/destination pairs into routed paths via the
//! ORS directions endpoint. Geocode results are cached per query string.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::models::{Route, TravelMode};

/// Tolerance in degrees between a geocoded endpoint and the snapped path
/// endpoint returned by the directions service
const SNAP_TOLERANCE_DEGREES: f64 = 0.01;

/// Trait for place resolution and routing
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolve a free-text place name to a coordinate
    ///
    /// Takes the first candidate returned by the geocoding service.
    async fn geocode(&self, query: &str) -> Result<GeoLocation, RoutingError>;

    /// Resolve origin and destination, then compute a routed path for the
    /// given travel mode
    ///
    /// Origin and destination are geocoded sequentially; any geocode failure
    /// aborts the operation before the directions endpoint is called.
    async fn route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Route, RoutingError>;
}

/// OpenRouteService-backed resolver with a per-query geocode cache
#[derive(Debug)]
pub struct OrsClient {
    client: Client,
    config: RoutingConfig,
    geocode_cache: Cache<String, GeoLocation>,
}

impl OrsClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::Configuration` if the configuration is invalid
    /// (most notably a missing API key) or the HTTP client cannot be built.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Wayfinder/0.2 (https://github.com/twohreichel/wayfinder)")
            .build()
            .map_err(|e| RoutingError::Configuration(e.to_string()))?;

        let geocode_cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(
                u64::from(config.cache_ttl_minutes.max(1)) * 60,
            ))
            .build();

        Ok(Self {
            client,
            config: config.clone(),
            geocode_cache,
        })
    }

    /// Map a reqwest error to the routing error taxonomy
    fn transport_error(&self, e: &reqwest::Error) -> RoutingError {
        if e.is_timeout() {
            RoutingError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            RoutingError::ConnectionFailed(e.to_string())
        }
    }

    /// Parse a geocode search response body into a coordinate
    ///
    /// Takes the first feature; the provider lists coordinates in
    /// (longitude, latitude) order.
    fn parse_geocode_response(body: &str, query: &str) -> Result<GeoLocation, RoutingError> {
        let raw: RawGeocodeResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let feature = raw.features.first().ok_or_else(|| RoutingError::NoResult {
            query: query.to_string(),
        })?;

        let [lon, lat] = Self::lon_lat_pair(&feature.geometry.coordinates)?;
        GeoLocation::from_lon_lat(lon, lat).map_err(|e| RoutingError::ParseError(e.to_string()))
    }

    /// Parse a directions response body into path points and raw distance
    /// in meters
    fn parse_directions_response(
        body: &str,
        from: &str,
        to: &str,
    ) -> Result<(Vec<GeoLocation>, f64), RoutingError> {
        let raw: RawDirectionsResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let feature = raw
            .features
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::EmptyRoute {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let points = feature
            .geometry
            .coordinates
            .iter()
            .map(|pair| {
                let [lon, lat] = Self::lon_lat_pair(pair)?;
                GeoLocation::from_lon_lat(lon, lat)
                    .map_err(|e| RoutingError::ParseError(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((points, feature.properties.summary.distance))
    }

    /// Extract a (longitude, latitude) pair from a raw coordinate array
    ///
    /// Directions responses may carry extra dimensions (elevation); only the
    /// first two are consumed.
    fn lon_lat_pair(raw: &[f64]) -> Result<[f64; 2], RoutingError> {
        match raw {
            [lon, lat, ..] => Ok([*lon, *lat]),
            _ => Err(RoutingError::ParseError(format!(
                "Coordinate pair has {} dimensions, expected at least 2",
                raw.len()
            ))),
        }
    }

    /// Format a coordinate as `lon,lat` for the directions query string
    fn lon_lat_param(location: &GeoLocation) -> String {
        format!("{},{}", location.longitude(), location.latitude())
    }
}

#[async_trait]
impl LocationResolver for OrsClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<GeoLocation, RoutingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RoutingError::InvalidQuery(
                "Place query must not be empty".to_string(),
            ));
        }

        let cache_key = query.to_lowercase();
        if self.config.caching_enabled() {
            if let Some(location) = self.geocode_cache.get(&cache_key).await {
                debug!(%query, "Geocode cache hit");
                return Ok(location);
            }
        }

        let url = format!("{}/geocode/search", self.config.base_url);
        let params = [("api_key", self.config.api_key.as_str()), ("text", query)];

        debug!(%query, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !response.status().is_success() {
            return Err(RoutingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let location = Self::parse_geocode_response(&body, query)?;

        if self.config.caching_enabled() {
            self.geocode_cache.insert(cache_key, location).await;
        }

        debug!(%query, %location, "Geocoded place");
        Ok(location)
    }

    #[instrument(skip(self))]
    async fn route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Route, RoutingError> {
        let origin_coords = self.geocode(origin).await?;
        let destination_coords = self.geocode(destination).await?;

        let url = format!("{}/v2/directions/{}", self.config.base_url, mode.profile());
        let params = [
            ("api_key", self.config.api_key.clone()),
            ("start", Self::lon_lat_param(&origin_coords)),
            ("end", Self::lon_lat_param(&destination_coords)),
        ];

        debug!(%origin_coords, %destination_coords, profile = mode.profile(), "Requesting directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !response.status().is_success() {
            return Err(RoutingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let (points, distance_meters) = Self::parse_directions_response(&body, origin, destination)?;

        if let Some(start) = points.first() {
            if !start.within_degrees(&origin_coords, SNAP_TOLERANCE_DEGREES) {
                warn!(%start, %origin_coords, "Path start diverges from geocoded origin");
            }
        }
        if let Some(end) = points.last() {
            if !end.within_degrees(&destination_coords, SNAP_TOLERANCE_DEGREES) {
                warn!(%end, %destination_coords, "Path end diverges from geocoded destination");
            }
        }

        let route = Route {
            points,
            mode,
            distance_km: Route::round_km(distance_meters),
            distance_meters,
        };

        debug!(points = route.points.len(), summary = %route.summary(), "Route resolved");
        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    #[serde(default)]
    features: Vec<RawGeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct RawGeocodeFeature {
    geometry: RawPointGeometry,
}

#[derive(Debug, Deserialize)]
struct RawPointGeometry {
    /// (longitude, latitude), possibly with extra dimensions
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    #[serde(default)]
    features: Vec<RawDirectionsFeature>,
}

#[derive(Debug, Deserialize)]
struct RawDirectionsFeature {
    geometry: RawLineGeometry,
    properties: RawRouteProperties,
}

#[derive(Debug, Deserialize)]
struct RawLineGeometry {
    /// Ordered (longitude, latitude) pairs along the path
    coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct RawRouteProperties {
    summary: RawRouteSummary,
}

#[derive(Debug, Deserialize)]
struct RawRouteSummary {
    /// Total distance in meters
    distance: f64,
}
